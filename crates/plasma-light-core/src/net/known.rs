/// A network the device is allowed to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: &'static str,
    pub password: &'static str,
}

/// Pick the first known network that shows up in a scan.
///
/// Known networks are tried in order. A known network matches when its name
/// is contained in a visible SSID, so `"Home"` also matches `"Home-5G"`.
/// Entries with an empty name never match.
pub fn select_known_network<'a, I, S>(
    known: &'a [WifiCredentials],
    visible: I,
) -> Option<&'a WifiCredentials>
where
    I: IntoIterator<Item = S> + Clone,
    S: AsRef<str>,
{
    known.iter().find(|network| {
        !network.ssid.is_empty()
            && visible
                .clone()
                .into_iter()
                .any(|ssid| ssid.as_ref().contains(network.ssid))
    })
}
