//! Prompt template for test scenario generation

use crate::models::FeatureRequest;

/// Header row the model is asked to produce. The extractor skips rows whose
/// first cell matches the first column label.
pub const TABLE_HEADER: &str = "| Scenario ID | Description | Test Data/Steps | Expected Result |";

/// Build the QA prompt for a feature
pub fn build_prompt(feature: &FeatureRequest) -> String {
    format!(
        "As a QA Engineer, I need comprehensive test scenarios for the following feature:

Feature: {name}
Description: {description}

Please generate detailed test scenarios covering:
1. Positive test cases (Happy paths)
2. Negative test cases (Error handling)
3. Validation test cases
4. Edge cases
5. Security considerations
6. Performance aspects

Format the scenarios in a table with the following columns:
{header}

Note:
- Scenario IDs should follow the format: SC-{{FEATURE}}-{{NUMBER}}
- Include specific test data and validation criteria
- Consider different user roles if applicable
- Include boundary conditions
- Consider integration points with other features",
        name = feature.feature_name,
        description = feature.description,
        header = TABLE_HEADER,
    )
}
