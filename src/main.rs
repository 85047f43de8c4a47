use counter_widget::{config, widget::CounterWidget};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting {} window", config::TITLE);

    iced::application(config::TITLE, CounterWidget::update, CounterWidget::view)
        .window_size(config::WINDOW_SIZE)
        .run()
}
