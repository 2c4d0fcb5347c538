use crate::demo::*;

use std::fs;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use divisive_norm::{DemoInputs, PolicyPosition, POSITION_RANGE, WEIGHT_RANGE};

// Raw file structures. They mirror the JSON layout and are converted into
// library inputs only after validation.

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub scenarios: Vec<RawScenario>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RawScenario {
    pub name: String,
    #[serde(rename = "aSocial")]
    pub a_social: f64,
    #[serde(rename = "aFiscal")]
    pub a_fiscal: f64,
    #[serde(rename = "bSocial")]
    pub b_social: f64,
    #[serde(rename = "bFiscal")]
    pub b_fiscal: f64,
    #[serde(rename = "cSocial")]
    pub c_social: f64,
    #[serde(rename = "cFiscal")]
    pub c_fiscal: f64,
    pub weight: Option<f64>,
}

/// A validated preset: a name plus a full input snapshot.
#[derive(PartialEq, Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub inputs: DemoInputs,
}

/// Reads and validates the preset scenarios from a JSON file.
pub fn read_scenarios(path: &str) -> DemoResult<Vec<Scenario>> {
    let contents = fs::read_to_string(path).context(OpeningScenariosSnafu { path })?;
    let file: ScenarioFile =
        serde_json::from_str(&contents).context(ParsingScenariosSnafu { path })?;
    file.scenarios.iter().map(validate_scenario).collect()
}

fn validate_scenario(raw: &RawScenario) -> DemoResult<Scenario> {
    let coords = [
        ("aSocial", raw.a_social),
        ("aFiscal", raw.a_fiscal),
        ("bSocial", raw.b_social),
        ("bFiscal", raw.b_fiscal),
        ("cSocial", raw.c_social),
        ("cFiscal", raw.c_fiscal),
    ];
    for (field, value) in coords.iter() {
        ensure!(
            *value >= POSITION_RANGE.0 && *value <= POSITION_RANGE.1,
            InvalidScenarioSnafu {
                name: raw.name.clone(),
                message: format!("{} = {} is outside [0, 1]", field, value),
            }
        );
    }
    let weight = raw.weight.unwrap_or(1.0);
    ensure!(
        weight >= WEIGHT_RANGE.0 && weight <= WEIGHT_RANGE.1,
        InvalidScenarioSnafu {
            name: raw.name.clone(),
            message: format!("weight = {} is outside [0.1, 2]", weight),
        }
    );
    Ok(Scenario {
        name: raw.name.clone(),
        inputs: DemoInputs {
            positions: [
                PolicyPosition::new(raw.a_social, raw.a_fiscal),
                PolicyPosition::new(raw.b_social, raw.b_fiscal),
                PolicyPosition::new(raw.c_social, raw.c_fiscal),
            ],
            weight,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawScenario {
        RawScenario {
            name: name.to_string(),
            a_social: 0.2,
            a_fiscal: 0.8,
            b_social: 0.8,
            b_fiscal: 0.2,
            c_social: 0.1,
            c_fiscal: 0.1,
            weight: None,
        }
    }

    #[test]
    fn parses_a_scenario_file() {
        let contents = r#"
        {
            "scenarios": [
                {
                    "name": "defaults",
                    "aSocial": 0.2, "aFiscal": 0.8,
                    "bSocial": 0.8, "bFiscal": 0.2,
                    "cSocial": 0.1, "cFiscal": 0.1,
                    "weight": 1.0
                },
                {
                    "name": "c moves up",
                    "aSocial": 0.2, "aFiscal": 0.8,
                    "bSocial": 0.8, "bFiscal": 0.2,
                    "cSocial": 0.5, "cFiscal": 0.1
                }
            ]
        }"#;
        let file: ScenarioFile = serde_json::from_str(contents).unwrap();
        assert_eq!(file.scenarios.len(), 2);
        assert_eq!(file.scenarios[1].weight, None);

        let scenario = validate_scenario(&file.scenarios[1]).unwrap();
        assert_eq!(scenario.name, "c moves up");
        assert_eq!(scenario.inputs.positions[2].social, 0.5);
        // Missing weight falls back to the default of the demo.
        assert_eq!(scenario.inputs.weight, 1.0);
    }

    #[test]
    fn rejects_out_of_range_position() {
        let mut bad = raw("bad position");
        bad.c_social = 1.5;
        let res = validate_scenario(&bad);
        assert!(matches!(res, Err(DemoError::InvalidScenario { .. })));
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut bad = raw("bad weight");
        bad.weight = Some(0.0);
        let res = validate_scenario(&bad);
        assert!(matches!(res, Err(DemoError::InvalidScenario { .. })));
    }
}
