pub mod moons;
