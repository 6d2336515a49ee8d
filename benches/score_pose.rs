use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;

use footprint_checker::providers::{StaticFootprint, StaticMap, StaticPose};
use footprint_checker::types::FREE;
use footprint_checker::{
    CheckerConfig, CollisionChecker, Costmap, Footprint, MapInfo, Pose2, UnknownPolicy,
};

fn bench_score_pose(c: &mut Criterion) {
    let checker = build_checker();
    let candidates = build_candidates();

    c.bench_function("score_footprint_at_pose", |b| {
        b.iter(|| {
            let mut worst = 0u8;
            for pose in &candidates {
                if let Ok(score) = checker.score_footprint_at_pose(*pose) {
                    worst = worst.max(score);
                }
            }
            black_box(worst);
        });
    });

    c.bench_function("is_footprint_free", |b| {
        b.iter(|| {
            let mut free = 0usize;
            for pose in &candidates {
                if checker.is_footprint_free(*pose) {
                    free += 1;
                }
            }
            black_box(free);
        });
    });
}

fn build_checker() -> CollisionChecker<StaticMap, StaticFootprint, StaticPose> {
    let map = Costmap::filled(MapInfo::square(256, 0.05), FREE);
    let footprint = Footprint::new(vec![
        Vec2::new(0.3, 0.25),
        Vec2::new(-0.3, 0.25),
        Vec2::new(-0.3, -0.25),
        Vec2::new(0.3, -0.25),
    ]);
    CollisionChecker::new(
        CheckerConfig::new("map", "base_link", UnknownPolicy::Tolerate),
        StaticMap::new(map),
        StaticFootprint(footprint),
        StaticPose(Pose2::new(6.4, 6.4, 0.0)),
    )
}

fn build_candidates() -> Vec<Pose2> {
    let mut poses = Vec::new();
    for i in 0..32 {
        let t = i as f32 * 0.1;
        poses.push(Pose2::new(4.0 + t, 4.0 + (t * 0.5).sin(), t));
    }
    poses
}

criterion_group!(benches, bench_score_pose);
criterion_main!(benches);
