//! Scripted pointer input.
use anyhow::Context;
use grid_core::{Coordinate, PointerEvent};

/// Parses `event x y` steps separated by `;` or newlines.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<(PointerEvent, Coordinate)>> {
    script
        .split([';', '\n'])
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(step: &str) -> anyhow::Result<(PointerEvent, Coordinate)> {
    let mut words = step.split_whitespace();
    let (Some(event), Some(x), Some(y), None) =
        (words.next(), words.next(), words.next(), words.next())
    else {
        anyhow::bail!("Expected `event x y`, got `{}`", step);
    };

    let event: PointerEvent = event
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown pointer event `{}`", event))?;
    let x: i32 = x.parse().with_context(|| format!("Bad x in `{}`", step))?;
    let y: i32 = y.parse().with_context(|| format!("Bad y in `{}`", step))?;
    Ok((event, Coordinate::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        let steps = parse_script("enter 1 2; Click 1 2\nexit 1 2;").unwrap();
        assert_eq!(
            steps,
            vec![
                (PointerEvent::Enter, Coordinate::new(1, 2)),
                (PointerEvent::Click, Coordinate::new(1, 2)),
                (PointerEvent::Exit, Coordinate::new(1, 2)),
            ]
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(parse_script("hover 1 2").is_err());
        assert!(parse_script("click 1").is_err());
        assert!(parse_script("click 1 2 3").is_err());
        assert!(parse_script("click a 2").is_err());
    }
}
