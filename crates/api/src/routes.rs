pub mod health;
pub mod slots;
