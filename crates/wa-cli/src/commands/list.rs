use anyhow::Result;
use clap::Args;
use wa_client::EndpointSpec;
use wa_client::registry;
use wa_core::Surface;

#[derive(Args, Debug)]
pub struct ListCommand {
  /// Only show one surface: advisor, investor or firm
  #[arg(short, long)]
  surface: Option<String>,

  /// Print the table as JSON
  #[arg(long)]
  json: bool,
}

pub fn execute(cmd: ListCommand) -> Result<()> {
  let specs = select(cmd.surface.as_deref())?;

  if cmd.json {
    println!("{}", serde_json::to_string_pretty(&specs)?);
    return Ok(());
  }

  for spec in specs {
    println!("{}", render_line(spec));
  }
  Ok(())
}

fn select(surface: Option<&str>) -> Result<Vec<&'static EndpointSpec>> {
  match surface {
    None => Ok(registry::all().iter().collect()),
    Some(name) => {
      let surface: Surface = name.parse().map_err(anyhow::Error::msg)?;
      Ok(registry::by_surface(surface).collect())
    }
  }
}

fn render_line(spec: &EndpointSpec) -> String {
  let params = if spec.allowed_params.is_empty() {
    String::new()
  } else {
    format!("  [{}]", spec.allowed_params.join(", "))
  };
  format!(
    "{:<40} {:<9} {:<5} {}{}",
    spec.key,
    spec.surface.to_string(),
    spec.method.as_str(),
    spec.uri_template,
    params
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_select_surface() {
    assert_eq!(select(Some("firm")).unwrap().len(), 1);
    assert_eq!(select(None).unwrap().len(), registry::all().len());
    assert!(select(Some("bank")).is_err());
  }

  #[test]
  fn test_render_line() {
    let spec = registry::lookup("Accounts").unwrap();
    let line = render_line(spec);
    assert!(line.starts_with("Accounts "));
    assert!(line.contains("/api/v2/advisor/accounts"));
    assert!(line.ends_with("[ignoreOrion]"));
  }
}
