pub mod commentary;
pub mod credentials;
pub mod scraper;
pub mod session_manager;
pub mod upstream;
