pub mod equipo;
pub mod jugador;

pub use equipo::EquipoService;
pub use jugador::JugadorService;
