pub mod health;
pub mod solve;

pub use health::check;
pub use solve::solve;
