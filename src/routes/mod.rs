use actix_web::web;

pub mod equipos;
pub mod jugadores;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(equipos::configure)
            .configure(jugadores::configure),
    );
}
