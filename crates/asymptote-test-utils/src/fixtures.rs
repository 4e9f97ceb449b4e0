//! Canned code samples and analysis payloads.

use serde_json::{json, Value};

pub const LINEAR_SCAN_CODE: &str = "for i in range(n): print(i)";

pub const NESTED_LOOP_CODE: &str = "for i in range(n):\n    for j in range(n):\n        print(i, j)";

/// Linear time, constant space.
pub fn linear_scan_response() -> Value {
    json!({
        "timeComplexity":  { "bestCase": "O(n)", "averageCase": "O(n)", "worstCase": "O(n)" },
        "spaceComplexity": { "bestCase": "O(1)", "averageCase": "O(1)", "worstCase": "O(1)" },
        "summary": "Linear scan",
        "optimizedCode": "for i in range(n):\n    print(i)"
    })
}

pub fn linear_scan_response_json() -> String {
    linear_scan_response().to_string()
}

/// Quadratic time, linear space, no summary or optimized code.
pub fn nested_loop_response() -> Value {
    json!({
        "timeComplexity":  { "bestCase": "O(n^2)", "averageCase": "O(n^2)", "worstCase": "O(n^2)" },
        "spaceComplexity": { "bestCase": "O(1)", "averageCase": "O(n)", "worstCase": "O(n)" }
    })
}

/// What a model returns when it ignores the requested keys.
pub fn off_schema_response() -> Value {
    json!({ "analysis": "This code is linear." })
}
