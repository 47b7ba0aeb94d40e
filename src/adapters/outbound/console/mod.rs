/// Console adapters writing to the process's standard streams
mod stdout_presenter;

pub use stdout_presenter::StdoutPresenter;
