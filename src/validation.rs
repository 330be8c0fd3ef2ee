//! Explicit input validation for the request bodies, run by the handlers
//! before any service call. Each rule failure becomes one field-level
//! violation; all failed fields are reported together.

use serde::{Deserialize, Serialize};

use crate::database::models::{CreateEquipoRequest, CreateJugadorRequest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        FieldViolation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn check_required_len(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        violations.push(FieldViolation::new(
            field,
            format!("debe tener entre {min} y {max} caracteres"),
        ));
    }
}

fn check_max_len(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    max: usize,
) {
    if let Some(value) = value {
        if value.trim().chars().count() > max {
            violations.push(FieldViolation::new(
                field,
                format!("no puede exceder {max} caracteres"),
            ));
        }
    }
}

fn check_range(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<i16>,
    min: i16,
    max: i16,
) {
    if let Some(value) = value {
        if value < min || value > max {
            violations.push(FieldViolation::new(
                field,
                format!("debe estar entre {min} y {max}"),
            ));
        }
    }
}

pub fn validar_equipo(request: &CreateEquipoRequest) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_required_len(&mut violations, "nombre", &request.nombre, 2, 100);
    check_max_len(&mut violations, "ciudad", request.ciudad.as_deref(), 100);
    check_max_len(
        &mut violations,
        "abreviatura",
        request.abreviatura.as_deref(),
        10,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

pub fn validar_jugador(request: &CreateJugadorRequest) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if request.equipo_id < 1 {
        violations.push(FieldViolation::new("equipoId", "debe ser mayor a 0"));
    }
    check_required_len(&mut violations, "nombres", &request.nombres, 2, 100);
    check_required_len(&mut violations, "apellidos", &request.apellidos, 2, 100);
    check_range(&mut violations, "dorsal", request.dorsal, 0, 99);
    check_max_len(&mut violations, "posicion", request.posicion.as_deref(), 50);
    check_range(&mut violations, "estaturaCm", request.estatura_cm, 50, 250);
    check_range(&mut violations, "edad", request.edad, 15, 50);
    check_max_len(
        &mut violations,
        "nacionalidad",
        request.nacionalidad.as_deref(),
        50,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
