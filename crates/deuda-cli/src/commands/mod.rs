pub mod chart;
pub mod check;
pub mod dispatch;
pub mod lookup;
pub mod schema;
pub mod situation;
pub mod watch;
