//! Parsers for geometry given on the command line

/// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`
pub fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    Ok((parse_number(width)?, parse_number(height)?))
}

/// Parse `LEFT,TOP,WIDTH,HEIGHT`, e.g. `0,30,1920,1050`
pub fn parse_rect(s: &str) -> Result<(f64, f64, f64, f64), String> {
    let parts: Vec<&str> = s.split(',').collect();
    match parts.as_slice() {
        [left, top, width, height] => Ok((
            parse_number(left)?,
            parse_number(top)?,
            parse_number(width)?,
            parse_number(height)?,
        )),
        _ => Err(format!("expected LEFT,TOP,WIDTH,HEIGHT, got '{}'", s)),
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s.trim()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", s.trim()))
    }
}
