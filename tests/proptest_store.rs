//! Property-Based Tests — Gauge Store Invariants
//!
//! Uses `proptest` to check overwrite, label independence and that
//! the exposition parses back into exactly the values that were set.

use std::collections::BTreeMap;

use proptest::prelude::*;

use gauge_relay::adapters::metrics::PrometheusGaugeStore;
use gauge_relay::config::AppConfig;
use gauge_relay::domain::GaugeUpdate;
use gauge_relay::ports::GaugeStore;

type SeriesKey = (String, String, String);

const METRICS: [&str; 2] = ["terraform_resources_count", "cnrm_resources_count"];

fn store() -> PrometheusGaugeStore {
    PrometheusGaugeStore::from_specs(&AppConfig::default().metrics).unwrap()
}

/// Parse `name{organization="o",repository="r"} value` sample lines.
fn parse_exposition(text: &str) -> BTreeMap<SeriesKey, f64> {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(|line| {
            let (name, rest) = line.split_once('{').unwrap();
            let (labels, value) = rest.split_once("} ").unwrap();
            let mut org = None;
            let mut repo = None;
            for pair in labels.split(',') {
                let (key, val) = pair.split_once('=').unwrap();
                let val = val.trim_matches('"').to_string();
                match key {
                    "organization" => org = Some(val),
                    "repository" => repo = Some(val),
                    other => panic!("unexpected label {other}"),
                }
            }
            (
                (name.to_string(), org.unwrap(), repo.unwrap()),
                value.parse().unwrap(),
            )
        })
        .collect()
}

fn label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,7}"
}

fn value() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

proptest! {
    /// Setting v1 then v2 on one key renders v2.
    #[test]
    fn overwrite_keeps_latest(
        metric in 0usize..2,
        org in label(),
        repo in label(),
        v1 in value(),
        v2 in value(),
    ) {
        let store = store();
        let name = METRICS[metric];
        store.set(&GaugeUpdate::new(name, org.clone(), repo.clone(), v1)).unwrap();
        store.set(&GaugeUpdate::new(name, org.clone(), repo.clone(), v2)).unwrap();

        let series = parse_exposition(&store.render().unwrap());
        prop_assert_eq!(series.len(), 1);
        prop_assert_eq!(series.get(&(name.to_string(), org, repo)).copied(), Some(v2));
    }

    /// Writing one key leaves every other key's value in place.
    #[test]
    fn labels_are_independent(
        org in label(),
        repo in label(),
        other_repo in label(),
        v in value(),
        w in value(),
    ) {
        prop_assume!(repo != other_repo);
        let store = store();
        store.set(&GaugeUpdate::new(METRICS[0], org.clone(), other_repo.clone(), w)).unwrap();
        store.set(&GaugeUpdate::new(METRICS[1], org.clone(), repo.clone(), w)).unwrap();
        store.set(&GaugeUpdate::new(METRICS[0], org.clone(), repo.clone(), v)).unwrap();

        let series = parse_exposition(&store.render().unwrap());
        prop_assert_eq!(series.get(&(METRICS[0].to_string(), org.clone(), other_repo)).copied(), Some(w));
        prop_assert_eq!(series.get(&(METRICS[1].to_string(), org.clone(), repo.clone())).copied(), Some(w));
        prop_assert_eq!(series.get(&(METRICS[0].to_string(), org, repo)).copied(), Some(v));
    }

    /// The render contains exactly the set keys with their latest values.
    #[test]
    fn render_parses_back_to_latest_values(
        updates in prop::collection::vec((0usize..2, label(), label(), value()), 1..40),
    ) {
        let store = store();
        let mut expected = BTreeMap::new();
        for (metric, org, repo, v) in updates {
            let name = METRICS[metric];
            store.set(&GaugeUpdate::new(name, org.clone(), repo.clone(), v)).unwrap();
            expected.insert((name.to_string(), org, repo), v);
        }

        prop_assert_eq!(parse_exposition(&store.render().unwrap()), expected);
    }
}
