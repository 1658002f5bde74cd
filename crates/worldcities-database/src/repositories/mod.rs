//! Repository implementations for WorldCities entities.

pub mod city;
pub mod country;

pub use city::CityRepository;
pub use country::CountryRepository;
