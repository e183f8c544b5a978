//! Pages selected by the router.

mod home;
pub mod weather;

pub use home::HomePage;
pub use weather::WeatherPage;
