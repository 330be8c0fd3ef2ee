use actix_web::web;

use crate::handlers::jugadores;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jugadores")
            .route("", web::get().to(jugadores::get_jugadores))
            .route("", web::post().to(jugadores::create_jugador))
            .route("/{id}", web::get().to(jugadores::get_jugador))
            .route("/{id}", web::put().to(jugadores::update_jugador))
            .route("/{id}", web::delete().to(jugadores::delete_jugador))
            .route(
                "/{id}/toggle-active",
                web::put().to(jugadores::toggle_activo),
            )
            .route(
                "/{partido_id}/partido",
                web::get().to(jugadores::get_jugadores_por_partido),
            )
            .route(
                "/{partido_id}/partido/{equipo_id}",
                web::get().to(jugadores::get_jugadores_por_partido_y_equipo),
            ),
    );
}
