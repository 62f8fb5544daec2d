use std::fmt;

use ozkitchen_packaging::Catalog;

use crate::{config::Config, error::AppResult};

pub fn render(config: &Config) -> AppResult<String> {
    Ok(CatalogTable(&config.catalog()?).to_string())
}

struct CatalogTable<'a>(&'a Catalog);

impl fmt::Display for CatalogTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in self.0.iter() {
            writeln!(
                f,
                "{:<4} {:<20} {:>5} br  {}",
                option.id,
                option.name,
                option.price,
                option.category.as_deref().unwrap_or("-")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_catalog() -> anyhow::Result<()> {
        let text = render(&Config::default())?;

        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().is_some_and(|line| line.starts_with("1    Shiro Ena Gomen")));
        assert!(text.contains("Firfir"));

        Ok(())
    }
}
