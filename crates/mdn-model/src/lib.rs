pub mod issue;
pub mod kind;
pub mod rules;

pub use issue::{
    CheckFailure, ErrorLog, FailureCode, ParseFailure, RuleIssue, display_value,
    yaml_comment_block,
};
pub use kind::{RuleBucket, RuleKind};
pub use rules::{AllowedRules, CheckedRule, EditRules, LookupRules, VariableRules};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn issue_carries_bucket_of_its_kind() {
        let kind = RuleKind::Remap;
        let issue = RuleIssue {
            variable: "country".to_string(),
            rule: kind.as_str().to_string(),
            bucket: Some(kind.bucket()),
            value: Value::from("not a mapping"),
            failure: CheckFailure::new(FailureCode::NotADictionary),
        };
        assert_eq!(issue.bucket, Some(RuleBucket::Edits));
        assert_eq!(issue.failure.code.as_str(), "not a dictionary");
    }

    #[test]
    fn validated_structure_serializes_with_bucket_names() {
        let rules = VariableRules::default();
        let dumped = serde_yaml::to_string(&rules).expect("serialize rules");
        assert!(dumped.contains("edits:"));
        assert!(dumped.contains("lookups:"));
        assert!(dumped.contains("allowed:"));
    }
}
