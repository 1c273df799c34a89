pub mod hero;
pub mod hero_power;
pub mod power;

pub use hero::HeroService;
pub use hero_power::HeroPowerService;
pub use power::PowerService;
