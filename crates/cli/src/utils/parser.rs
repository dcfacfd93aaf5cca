/// Parse a `KEY=VALUE` environment override. The value may be empty or contain `=`.
pub fn parse_env_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        Some(_) => Err(format!("missing variable name in '{arg}'")),
        None => Err(format!("expected KEY=VALUE, got '{arg}'")),
    }
}
