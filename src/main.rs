use anyhow::{Result, anyhow};
use course_compass::Website;
use leptos::logging::log;

fn setup() -> Result<()> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or_else(|| anyhow!("no document body to mount into"))?;

    leptos::mount::mount_to(body, Website::app).forget();
    log!("landing page mounted");

    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(x) = setup() {
        panic!("error: {x}")
    }
}
