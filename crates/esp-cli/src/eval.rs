use anyhow::{Context, Result};
use std::path::Path;

use esp::config::EvalConfig;
use esp::Vector;

/// Read an [`EvalConfig`] from a JSON file.
pub fn load_eval_config<P: AsRef<Path>>(path: P) -> Result<EvalConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EvalConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Evaluate the configured expression and render the resulting vector.
pub fn run_eval(config: &EvalConfig) -> Result<String> {
    let result = config
        .evaluate()
        .with_context(|| format!("Failed to evaluate `{}`", config.operation))?;
    log::info!(
        "[ESP::Eval] `{}` produced {} elements",
        config.operation,
        result.len()
    );
    Ok(result.to_string())
}

/// Build `length` copies of `value` and render them.
///
/// The storage is reserved up front so an unsatisfiable length is reported
/// as an error instead of aborting the process.
pub fn run_repeat(value: f64, length: usize) -> Result<String> {
    let mut elements: Vec<f64> = Vec::new();
    elements
        .try_reserve_exact(length)
        .with_context(|| format!("Cannot allocate a vector of {} elements", length))?;
    elements.resize(length, value);
    Ok(Vector::from_vec(elements).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp::config::{Operation, RhsOperand};

    #[test]
    fn run_eval_renders_result() {
        let cfg = EvalConfig::new(
            Operation::Add,
            vec![1.0, 2.0, 3.0],
            Some(RhsOperand::Vector(vec![4.0, 5.0, 6.0])),
        );
        assert_eq!(run_eval(&cfg).unwrap(), "Vector([5,7,9])");
    }

    #[test]
    fn run_eval_carries_context() {
        let cfg = EvalConfig::new(Operation::Norm, vec![1.0], None);
        let err = run_eval(&cfg).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to evaluate `norm`"));
        assert!(chain.contains("not implemented"));
    }

    #[test]
    fn run_repeat_renders_copies() {
        assert_eq!(run_repeat(0.5, 3).unwrap(), "Vector([0.5,0.5,0.5])");
    }

    #[test]
    fn run_repeat_rejects_unallocatable_length() {
        let err = run_repeat(1.0, usize::MAX).unwrap_err();
        assert!(err.to_string().contains("Cannot allocate a vector of"));
    }
}
