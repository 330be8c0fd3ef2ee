pub mod equipo;
pub mod jugador;

pub use equipo::EquipoRepository;
pub use jugador::JugadorRepository;
