// Routed pages

mod about;
mod analyzer;
mod home;

pub use about::{AboutGroupPage, AboutProjectPage};
pub use analyzer::AnalyzerPage;
pub use home::HomePage;
