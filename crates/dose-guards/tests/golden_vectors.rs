use dose_guards::{evaluate, ActivityFilter, ActivitySnapshot, Listing, Verdict};
use solinfor_core::{Activity, DosageRule, ProductMovement};

fn activity(hectares: f64) -> Activity {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "nombre": 4,
        "campo": 2,
        "fecha": "2024-06-01T00:00:00.000Z",
        "hectareas": hectares,
        "autor": "operario"
    }))
    .unwrap()
}

fn movements(uses: &[(u64, f64)]) -> Vec<ProductMovement> {
    uses.iter()
        .enumerate()
        .map(|(i, (product, quantity))| {
            serde_json::from_value(serde_json::json!({
                "id": i + 1,
                "producto": product,
                "campo": 2,
                "fecha": "2024-06-01",
                "cantidad": quantity,
                "unidad": 1,
                "tipo": "salida",
                "actividad": 1
            }))
            .unwrap()
        })
        .collect()
}

fn rules(raw: serde_json::Value) -> Vec<DosageRule> {
    serde_json::from_value(raw).unwrap()
}

fn golden_vectors() -> Vec<(&'static str, f64, Vec<(u64, f64)>, serde_json::Value, Verdict)> {
    vec![
        (
            "exact optimum",
            10.0,
            vec![(7, 20.0)],
            serde_json::json!([{"idNombreActividad":4,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}]),
            Verdict::Optimal,
        ),
        (
            "above maximum",
            10.0,
            vec![(7, 35.0)],
            serde_json::json!([{"idNombreActividad":4,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}]),
            Verdict::NonCompliant,
        ),
        (
            "inside envelope",
            10.0,
            vec![(7, 28.0)],
            serde_json::json!([{"idNombreActividad":4,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}]),
            Verdict::Acceptable,
        ),
        (
            "second product never applied",
            10.0,
            vec![(7, 20.0)],
            serde_json::json!([
                {"idNombreActividad":4,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3},
                {"idNombreActividad":4,"idProducto":8,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}
            ]),
            Verdict::NonCompliant,
        ),
        (
            "rules for another activity type only",
            10.0,
            vec![(7, 900.0)],
            serde_json::json!([{"idNombreActividad":5,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}]),
            Verdict::Optimal,
        ),
        (
            "rule row without thresholds",
            10.0,
            vec![(7, 20.0)],
            serde_json::json!([{"idNombreActividad":4,"idProducto":7}]),
            Verdict::Acceptable,
        ),
        (
            "rule row with only a maximum",
            10.0,
            vec![(7, 40.0)],
            serde_json::json!([{"idNombreActividad":4,"idProducto":7,"litrosMaximos":3,"litrosMinimos":null}]),
            Verdict::NonCompliant,
        ),
    ]
}

#[test]
fn golden_vectors_hold() {
    for (name, hectares, uses, raw_rules, expected) in golden_vectors() {
        let a = activity(hectares);
        let m = movements(&uses);
        let r = rules(raw_rules);
        assert_eq!(evaluate(&a, &m, &r), expected, "{name}");
        assert_eq!(evaluate(&a, &m, &r), expected, "{name} (second call)");
    }
}

#[test]
fn snapshot_from_backend_json() {
    let raw = serde_json::json!({
        "activity_types": [{"id": 4, "nombre": "Fumigacion"}],
        "fields": [{"id": 2, "nombre": "Lote 2"}],
        "activities": [{
            "id": 1, "nombre": 4, "campo": 2, "fecha": "2024-06-01T00:00:00Z",
            "hectareas": 10, "autor": "operario"
        }],
        "movements": [{
            "id": 1, "producto": 7, "campo": 2, "fecha": "2024-06-01",
            "cantidad": 20, "unidad": 1, "tipo": "salida", "actividad": 1
        }],
        "rules": [{"idNombreActividad":4,"idProducto":7,"litrosMinimos":1,"litrosOptimos":2,"litrosMaximos":3}]
    });
    let snapshot: ActivitySnapshot = serde_json::from_value(raw).unwrap();
    match snapshot.list(ActivityFilter::default()) {
        Listing::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].verdict, Verdict::Optimal);
            assert_eq!(rows[0].badge.label, "Optimo");
        }
        Listing::NoMatches => panic!("unfiltered listing cannot be NoMatches"),
    }
}

#[test]
fn snapshot_with_failed_fetches_degrades() {
    let raw = serde_json::json!({
        "fields": [{"id": 2, "nombre": "Lote 2"}],
        "activities": [{
            "id": 1, "nombre": 4, "campo": 2, "fecha": "2024-06-01",
            "hectareas": 10, "autor": "operario"
        }]
    });
    let snapshot: ActivitySnapshot = serde_json::from_value(raw).unwrap();
    let Listing::Rows(rows) = snapshot.list(ActivityFilter::default()) else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].verdict, Verdict::Optimal);
    assert_eq!(rows[0].activity_type, "");
}
