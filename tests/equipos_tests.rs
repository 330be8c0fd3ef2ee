use actix_web::{http::StatusCode, test, App};
use pretty_assertions::assert_eq;
use serde_json::json;

use marcador_api::database::models::EquipoDto;
use marcador_api::handlers::shared::ErrorBody;

mod common;

#[actix_web::test]
async fn crear_equipo_aplica_valores_por_defecto() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let req = test::TestRequest::post()
        .uri("/api/equipos")
        .set_json(json!({
            "nombre": "  Lakers  ",
            "ciudad": " Los Angeles ",
            "abreviatura": "LAL"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let creado: EquipoDto = test::read_body_json(resp).await;
    assert_eq!(creado.nombre, "Lakers");
    assert_eq!(creado.ciudad.as_deref(), Some("Los Angeles"));
    assert!(creado.activo);

    // A subsequent fetch returns the same record, timestamp included.
    let req = test::TestRequest::get()
        .uri(&format!("/api/equipos/{}", creado.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let leido: EquipoDto = test::read_body_json(resp).await;
    assert_eq!(leido.id, creado.id);
    assert_eq!(leido.fecha_creacion, creado.fecha_creacion);
}

#[actix_web::test]
async fn crear_equipo_nombre_duplicado_rechazado() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    ctx.sembrar_equipo("Lakers").await;

    // Different casing and surrounding whitespace still collide.
    let req = test::TestRequest::post()
        .uri("/api/equipos")
        .set_json(json!({ "nombre": "  lakers " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = test::read_body_json(resp).await;
    assert!(body.message.contains("Ya existe un equipo"));
}

#[actix_web::test]
async fn actualizar_equipo_inexistente_rechazado() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let req = test::TestRequest::put()
        .uri("/api/equipos/999")
        .set_json(json!({ "nombre": "Fantasma" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn actualizar_equipo_respeta_unicidad_del_nombre() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let lakers = ctx.sembrar_equipo("Lakers").await;
    ctx.sembrar_equipo("Celtics").await;

    // Renaming onto another team's name fails.
    let req = test::TestRequest::put()
        .uri(&format!("/api/equipos/{}", lakers.id))
        .set_json(json!({ "nombre": "CELTICS" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Renaming to its own unchanged name succeeds.
    let req = test::TestRequest::put()
        .uri(&format!("/api/equipos/{}", lakers.id))
        .set_json(json!({ "nombre": "Lakers", "ciudad": "Los Angeles", "activo": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let actualizado: EquipoDto = test::read_body_json(resp).await;
    assert_eq!(actualizado.ciudad.as_deref(), Some("Los Angeles"));
    assert_eq!(actualizado.fecha_creacion, lakers.fecha_creacion);
}

#[actix_web::test]
async fn eliminar_equipo_arrastra_sus_jugadores() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let equipo = ctx.sembrar_equipo("Lakers").await;
    let j1 = ctx.sembrar_jugador(equipo.id, "LeBron", "James", Some(23)).await;
    let j2 = ctx.sembrar_jugador(equipo.id, "Austin", "Reaves", Some(15)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/equipos/{}", equipo.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Team and both players are gone.
    let req = test::TestRequest::get()
        .uri(&format!("/api/equipos/{}", equipo.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for id in [j1.id, j2.id] {
        let jugador = ctx.jugador_service().get_by_id(id).await.unwrap();
        assert!(jugador.is_none());
    }
}

#[actix_web::test]
async fn eliminar_equipo_inexistente_rechazado() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let req = test::TestRequest::delete()
        .uri("/api/equipos/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn toggle_activo_solo_cambia_la_bandera() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let equipo = ctx.sembrar_equipo("Lakers").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/equipos/{}/toggle-active", equipo.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let apagado: EquipoDto = test::read_body_json(resp).await;
    assert!(!apagado.activo);
    assert_eq!(apagado.nombre, equipo.nombre);
    assert_eq!(apagado.fecha_creacion, equipo.fecha_creacion);

    // A second toggle restores the original state.
    let req = test::TestRequest::put()
        .uri(&format!("/api/equipos/{}/toggle-active", equipo.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let encendido: EquipoDto = test::read_body_json(resp).await;
    assert!(encendido.activo);
}

#[actix_web::test]
async fn listado_filtra_activos_y_ordena_por_nombre() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    ctx.sembrar_equipo("Lakers").await;
    ctx.sembrar_equipo("Bulls").await;
    let celtics = ctx.sembrar_equipo("Celtics").await;
    ctx.equipo_service().toggle_activo(celtics.id).await.unwrap();

    // Default: only active teams, name ascending.
    let req = test::TestRequest::get().uri("/api/equipos").to_request();
    let resp = test::call_service(&app, req).await;
    let activos: Vec<EquipoDto> = test::read_body_json(resp).await;
    let nombres: Vec<&str> = activos.iter().map(|e| e.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Bulls", "Lakers"]);

    // soloActivos=false returns everything.
    let req = test::TestRequest::get()
        .uri("/api/equipos?soloActivos=false")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let todos: Vec<EquipoDto> = test::read_body_json(resp).await;
    assert_eq!(todos.len(), 3);
}

#[actix_web::test]
async fn buscar_y_existe_por_nombre() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    ctx.sembrar_equipo("Lakers").await;

    let req = test::TestRequest::get()
        .uri("/api/equipos/buscar?nombre=LAKERS")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let encontrado: EquipoDto = test::read_body_json(resp).await;
    assert_eq!(encontrado.nombre, "Lakers");

    let req = test::TestRequest::get()
        .uri("/api/equipos/buscar?nombre=Desconocido")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/equipos/existe?nombre=lakers")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let existe: bool = test::read_body_json(resp).await;
    assert!(existe);

    let req = test::TestRequest::get()
        .uri("/api/equipos/existe?nombre=Desconocido")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let existe: bool = test::read_body_json(resp).await;
    assert!(!existe);
}

#[actix_web::test]
async fn crear_equipo_invalido_reporta_violaciones() {
    let ctx = common::TestContext::new().await.unwrap();
    let app = test::init_service(App::new().configure(common::app_config(&ctx.pool))).await;

    let req = test::TestRequest::post()
        .uri("/api/equipos")
        .set_json(json!({
            "nombre": "L",
            "abreviatura": "DEMASIADO-LARGA"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = test::read_body_json(resp).await;
    let violations = body.violations.unwrap();
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["nombre", "abreviatura"]);
}
