// Shared layout components

mod glass_card;
mod navbar;

pub use glass_card::GlassCard;
pub use navbar::Navbar;
