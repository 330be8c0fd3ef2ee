use actix_web::web;

use crate::handlers::equipos;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/equipos")
            .route("", web::get().to(equipos::get_equipos))
            .route("", web::post().to(equipos::create_equipo))
            // Literal paths go before the {id} matchers.
            .route("/buscar", web::get().to(equipos::buscar_por_nombre))
            .route("/existe", web::get().to(equipos::existe_por_nombre))
            .route("/{id}", web::get().to(equipos::get_equipo))
            .route("/{id}", web::put().to(equipos::update_equipo))
            .route("/{id}", web::delete().to(equipos::delete_equipo))
            .route("/{id}/toggle-active", web::put().to(equipos::toggle_activo)),
    );
}
