use crate::commands;
use crate::config::{Args, Command};
use clap::Parser;
use prometheus_bridge::ComplianceMetrics;
use route_guards::RoutePaths;
use std::path::PathBuf;

fn scratch(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("solinfor-cli-{}-{}", std::process::id(), name));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn parses_evaluate_with_filters() {
    let args = Args::try_parse_from([
        "solinfor",
        "evaluate",
        "--snapshot",
        "snap.json",
        "--field",
        "4",
        "--json",
        "--metrics",
    ])
    .unwrap();
    assert!(args.metrics);
    match args.command {
        Command::Evaluate(eval) => {
            assert_eq!(eval.field, Some(4));
            assert_eq!(eval.activity_type, None);
            assert!(eval.json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn navigate_requires_a_path() {
    assert!(Args::try_parse_from(["solinfor", "navigate"]).is_err());
}

#[test]
fn evaluate_prints_badges() {
    let snapshot = scratch(
        "snapshot.json",
        r#"{
            "activity_types": [{"id": 1, "nombre": "Pulverizacion"}],
            "fields": [{"id": 4, "nombre": "Lote Norte"}],
            "activities": [
                {"id": 1, "nombre": 1, "campo": 4, "fecha": "2024-03-01", "hectareas": 10, "autor": "jperez"}
            ],
            "movements": [
                {"id": 1, "producto": 10, "campo": 4, "fecha": "2024-03-01", "cantidad": 20, "unidad": 1, "actividad": 1}
            ],
            "rules": [
                {"idNombreActividad": 1, "idProducto": 10, "litrosMinimos": 1, "litrosOptimos": 2, "litrosMaximos": 3}
            ]
        }"#,
    );
    let metrics = ComplianceMetrics::new().unwrap();
    let args = crate::config::EvaluateArgs {
        snapshot,
        activity_type: None,
        field: None,
        json: false,
    };
    let out = commands::evaluate(&args, &metrics).unwrap();
    assert!(out.contains("01/03/2024"));
    assert!(out.contains("Optimo"));
    assert!(metrics.encode().unwrap().contains(r#"verdict="optimal""#));
}

#[test]
fn navigate_without_session_redirects() {
    let metrics = ComplianceMetrics::new().unwrap();
    let out = commands::navigate("/actividades", None, &RoutePaths::default(), &metrics).unwrap();
    assert!(out.contains("redirect_to_sign_in"));
}

#[test]
fn navigate_reads_validated_session() {
    let session = scratch(
        "session.json",
        r#"{
            "payload": {"id": 3, "username": "ana", "role": {"id": 1, "name": "lector", "permissions": ["LEER_ACTIVIDAD", "PERMISO_NUEVO"]}},
            "iat": 1700000000,
            "exp": 1700003600
        }"#,
    );
    let metrics = ComplianceMetrics::new().unwrap();
    let out = commands::navigate(
        "/actividades/agregar",
        Some(&session),
        &RoutePaths::default(),
        &metrics,
    )
    .unwrap();
    assert!(out.contains("unauthorized"));
    assert!(out.contains("AGREGAR_ACTIVIDAD"));
}

#[test]
fn check_rules_reports_every_problem() {
    let rules = scratch(
        "rules.json",
        r#"[{
            "nombreActividad": {"id": 1, "nombre": "Pulverizacion"},
            "validaciones": [
                {"idNombreActividad": 1, "idProducto": 10, "litrosMinimos": 3, "litrosOptimos": 2, "litrosMaximos": 4},
                {"idNombreActividad": 1, "idProducto": 11, "litrosMinimos": 1, "litrosOptimos": null, "litrosMaximos": 4}
            ]
        }]"#,
    );
    let err = commands::check_rules(&rules).unwrap_err().to_string();
    assert!(err.starts_with("2 rule problem(s)"));

    let ok = scratch(
        "rules-ok.json",
        r#"[{"nombreActividad": {"id": 1, "nombre": "Siembra"}, "validaciones": []}]"#,
    );
    assert_eq!(commands::check_rules(&ok).unwrap(), "1 rule set(s) ok");
}
