//! Sample IAM policy shown beside the action tree.
//!
//! The document is static; it does not follow the selection.

use serde_json::Value;

/// Policy text as displayed to the user.
pub const SAMPLE_POLICY: &str = r#"{
  "Version": "2012-10-17",
  "Statement": [
    {
      "Effect": "Allow",
      "Action": [
        "ec2:DescribeInstances",
        "ec2:StartInstances",
        "ec2:StopInstances",
        "rds:DescribeDBInstances",
        "rds:StartDBInstance",
        "rds:StopDBInstance"
      ],
      "Resource": "*"
    }
  ]
}"#;

/// Parse the sample policy into a JSON value.
pub fn sample_policy() -> serde_json::Result<Value> {
    serde_json::from_str(SAMPLE_POLICY)
}

/// Actions granted by the sample policy, in document order.
pub fn granted_actions() -> serde_json::Result<Vec<String>> {
    let policy = sample_policy()?;
    let actions = policy["Statement"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|statement| statement["Action"].as_array().into_iter().flatten())
        .filter_map(|action| action.as_str().map(String::from))
        .collect();
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_policy_parses() {
        let policy = sample_policy().unwrap();
        assert_eq!(policy["Version"], "2012-10-17");
        assert_eq!(policy["Statement"][0]["Effect"], "Allow");
        assert_eq!(policy["Statement"][0]["Resource"], "*");
    }

    #[test]
    fn test_granted_actions() {
        let actions = granted_actions().unwrap();
        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], "ec2:DescribeInstances");
        assert!(actions.contains(&"rds:StopDBInstance".to_string()));
    }
}
