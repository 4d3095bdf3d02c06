//! The public GOKZ map cycle, a plain text list of every map servers rotate through.

use crate::{Error, ErrorKind, GlobalApi, Result, Transport};

/// Map names in file order. Blank lines are dropped; both `\r\n` and `\n` endings are accepted.
pub fn parse_mapcycle(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

impl<T: Transport> GlobalApi<T> {
    pub async fn get_mapcycle(&self) -> Result<Vec<String>> {
        let url = &self.config.mapcycle_url;
        log::debug!("GET {}", url);

        let body = self.transport.fetch(url, &[]).await.map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            Error::new(
                ErrorKind::SecondaryServiceFailure,
                "get_mapcycle",
                "Map cycle request failed.",
            )
            .with_raw(e.to_string())
        })?;

        let maps = parse_mapcycle(&body);
        if maps.is_empty() {
            return Err(Error::no_data("get_mapcycle", "Map cycle is empty."));
        }
        Ok(maps)
    }
}
