use embedded_io_async::Write;

use super::{HttpResult, io_error};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Plasma Light</title>
</head>
<body>
<div align="center">
<h1>Plasma Light</h1>
<h2>State: <strong>"#;

const PAGE_TAIL: &str = r#"</strong></h2>
<p>
<a href="/?mode=Blinky"><button class="button">Blinky</button></a>
<a href="/?mode=Fire"><button class="button">Fire</button></a>
<a href="/?mode=Rainbows"><button class="button">Rainbows</button></a>
<a href="/?mode=Spooky"><button class="button">Spooky</button></a>
<a href="/?mode=Off"><button class="button">Off</button></a>
</p>
</div>
</body>
</html>
"#;

/// Stream the status page with `mode` shown as the current state.
///
/// `mode` is inserted as-is, without HTML escaping. A crafted mode value
/// therefore ends up as markup in the page (and in every later page, since
/// it is also stored as the current mode).
pub async fn write_page<W: Write>(writer: &mut W, mode: &str) -> HttpResult {
    writer
        .write_all(PAGE_HEAD.as_bytes())
        .await
        .map_err(io_error)?;
    writer.write_all(mode.as_bytes()).await.map_err(io_error)?;
    writer
        .write_all(PAGE_TAIL.as_bytes())
        .await
        .map_err(io_error)
}
