use gpui::{
    App, AppContext, Bounds, IntoElement, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::components::{AppWindow, WindowPreferences};
use crate::export::ExportService;
use crate::{Quit, app::RateApp, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    // Register the quit action handler
    app_cx.on_action(quit);

    // Set up the application menu with Quit
    app_cx.set_menus(vec![Menu {
        name: "Balaji Jewellery Mart".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the main window with the rate entry/display view as its content.
pub fn open_main_window(
    app_cx: &mut App,
    export: ExportService,
) -> anyhow::Result<()> {
    let prefs = WindowPreferences::default();
    let bounds = Bounds::centered(None, prefs.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Balaji Jewellery Mart".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let rate_app = cx.new(|cx| RateApp::new(window, cx, export));
        let content = move || rate_app.clone().into_any_element();
        cx.new(|cx| AppWindow::new(cx, content))
    })?;

    Ok(())
}
