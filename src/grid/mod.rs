mod costmap;

pub use costmap::Costmap;
