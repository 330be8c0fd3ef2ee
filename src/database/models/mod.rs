pub mod equipo;
pub mod jugador;

pub use equipo::{CreateEquipoRequest, Equipo, EquipoDto, EquipoInput};
pub use jugador::{
    CreateJugadorRequest, Jugador, JugadorDto, JugadorInput, JugadorMiniDto, JugadorMiniRow,
};
