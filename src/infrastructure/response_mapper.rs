// Mapper to convert domain encodings to the renderer's column shapes
use crate::domain::dataset::Identifier;
use crate::domain::encoding::{LineEncoding, ScatterEncoding};
use crate::infrastructure::config::LineOutput;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct LineResponse {
    pub xs: Vec<Vec<f64>>,
    pub ys: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_end: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_end: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<String>>,
    pub widths: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphas: Option<Vec<f64>>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ScatterResponse {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "SID")]
    pub sid: Vec<Identifier>,
    pub size: Vec<f64>,
    pub line_size: Vec<f64>,
}

pub fn line_to_response(encoding: LineEncoding, output: LineOutput) -> LineResponse {
    match output {
        LineOutput::Minimal => LineResponse {
            xs: encoding.xs,
            ys: encoding.ys,
            x_end: None,
            y_end: None,
            label: None,
            widths: encoding.widths,
            alphas: None,
        },
        LineOutput::Extended => LineResponse {
            xs: encoding.xs,
            ys: encoding.ys,
            x_end: Some(encoding.x_end),
            y_end: Some(encoding.y_end),
            label: Some(encoding.label),
            widths: encoding.widths,
            alphas: encoding.alphas,
        },
    }
}

pub fn scatter_to_response(encoding: ScatterEncoding) -> ScatterResponse {
    ScatterResponse {
        x: encoding.x,
        y: encoding.y,
        sid: encoding.sid,
        size: encoding.size,
        line_size: encoding.line_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_encoding() -> LineEncoding {
        LineEncoding {
            xs: vec![vec![], vec![3.0]],
            ys: vec![vec![], vec![7.0]],
            x_end: vec![None, Some(3.0)],
            y_end: vec![None, Some(7.0)],
            label: vec!["a-1-x".to_string(), "b-2-y".to_string()],
            widths: vec![0.1, 0.6],
            alphas: Some(vec![0.1, 1.1]),
        }
    }

    #[test]
    fn test_minimal_line_response() {
        let response = line_to_response(line_encoding(), LineOutput::Minimal);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "xs": [[], [3.0]], "ys": [[], [7.0]], "widths": [0.1, 0.6] })
        );
    }

    #[test]
    fn test_extended_line_response_keeps_null_end_points() {
        let response = line_to_response(line_encoding(), LineOutput::Extended);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "xs": [[], [3.0]],
                "ys": [[], [7.0]],
                "x_end": [null, 3.0],
                "y_end": [null, 7.0],
                "label": ["a-1-x", "b-2-y"],
                "widths": [0.1, 0.6],
                "alphas": [0.1, 1.1]
            })
        );
    }

    #[test]
    fn test_extended_without_alphas_omits_field() {
        let mut encoding = line_encoding();
        encoding.alphas = None;
        let value = serde_json::to_value(line_to_response(encoding, LineOutput::Extended)).unwrap();
        assert!(value.get("alphas").is_none());
        assert!(value.get("label").is_some());
    }

    #[test]
    fn test_scatter_response_uses_sid_column_name() {
        let response = scatter_to_response(ScatterEncoding {
            x: vec![1.0],
            y: vec![2.0],
            sid: vec![Identifier::from("S1")],
            size: vec![10.0],
            line_size: vec![0.5],
        });
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "x": [1.0], "y": [2.0], "SID": ["S1"], "size": [10.0], "line_size": [0.5] })
        );
    }
}
