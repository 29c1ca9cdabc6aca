pub mod heap;
pub mod quick;
pub mod quick_random;
