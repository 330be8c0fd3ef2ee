pub mod equipos;
pub mod jugadores;
pub mod shared;
