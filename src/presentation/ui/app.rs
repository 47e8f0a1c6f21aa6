//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, RegistrationRequest};
use crate::application::use_cases::{LoadHospitalsUseCase, LoginUseCase, RegisterUseCase};
use crate::application::{ContextUpdate, HospitalContext};
use crate::domain::ports::HospitalSourcePort;
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::navigation::{Navigator, Route};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    HospitalAction, HospitalScreen, HospitalScreenState, LoginAction, LoginScreen, RegisterAction,
    RegisterScreen, SplashAction, SplashScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

enum CurrentScreen {
    Splash(SplashScreen),
    Login(LoginScreen),
    Register(RegisterScreen),
    Hospitals(HospitalScreenState),
}

/// Owns the route stack, the current screen and the hospital context.
pub struct App {
    theme: Theme,
    splash_delay: Duration,
    animations: bool,
    navigator: Navigator,
    screen: CurrentScreen,
    context: HospitalContext,
    login_use_case: LoginUseCase,
    register_use_case: RegisterUseCase,
    load_hospitals_use_case: LoadHospitalsUseCase,
    update_tx: mpsc::UnboundedSender<ContextUpdate>,
    update_rx: mpsc::UnboundedReceiver<ContextUpdate>,
    exiting: bool,
}

impl App {
    /// Creates app starting on the splash screen.
    #[must_use]
    pub fn new(config: &AppConfig, source: Arc<dyn HospitalSourcePort>) -> Self {
        let theme = Theme::new(&config.ui.accent_color);
        let splash_delay = config.splash.delay();
        let animations = config.ui.enable_animations;
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        Self {
            screen: CurrentScreen::Splash(SplashScreen::new(splash_delay, animations, theme)),
            theme,
            splash_delay,
            animations,
            navigator: Navigator::new(Route::Splash),
            context: HospitalContext::new(),
            login_use_case: LoginUseCase::new(),
            register_use_case: RegisterUseCase::new(),
            load_hospitals_use_case: LoadHospitalsUseCase::new(source),
            update_tx,
            update_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let load_task = self.load_hospitals_use_case.spawn(self.update_tx.clone());

        self.run_event_loop(terminal).await?;

        load_task.abort();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(update) = self.update_rx.recv() => {
                    self.handle_update(update);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                maybe_event = terminal_event => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Failed to read terminal event");
                        }
                        None => {
                            warn!("Terminal event stream closed");
                            self.exiting = true;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Splash(screen) => frame.render_widget(screen, area),
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Register(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Hospitals(state) => frame.render_stateful_widget(
                HospitalScreen::new(&self.context, &self.theme),
                area,
                state,
            ),
        }
    }

    /// Advances timers, returns whether a redraw is needed.
    fn tick(&mut self, elapsed: Duration) -> bool {
        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.tick(elapsed);
                if splash.is_elapsed() {
                    debug!("Splash delay elapsed");
                    self.leave_splash();
                }
                true
            }
            CurrentScreen::Hospitals(state) if self.context.is_loading() => {
                state.tick();
                true
            }
            _ => false,
        }
    }

    fn handle_update(&mut self, update: ContextUpdate) {
        if let Err(e) = self.context.apply(update) {
            warn!(error = %e, "Ignored hospital context update");
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if EventHandler::is_back_event(&key) {
            return self.go_back();
        }

        match &mut self.screen {
            CurrentScreen::Splash(screen) => {
                if screen.handle_key(key) == SplashAction::GetStarted {
                    debug!("Splash skipped");
                    self.leave_splash();
                }
            }
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::Submit => self.handle_login_submit(),
                LoginAction::OpenRegister => self.navigate(Route::Register),
                LoginAction::None => {}
            },
            CurrentScreen::Register(screen) => match screen.handle_key(key) {
                RegisterAction::Submit => self.handle_register_submit(),
                RegisterAction::OpenLogin => self.navigate(Route::Login),
                RegisterAction::None => {}
            },
            CurrentScreen::Hospitals(state) => {
                let count = self.context.hospitals().len();
                if let HospitalAction::React(index) = state.handle_key(key, count) {
                    self.handle_react(index);
                }
            }
        }

        EventResult::Continue
    }

    fn handle_login_submit(&mut self) {
        let CurrentScreen::Login(screen) = &mut self.screen else {
            return;
        };

        screen.set_validating();
        let request = LoginRequest::new(screen.form());

        match self.login_use_case.execute(request) {
            Ok(response) => {
                screen.set_accepted();
                self.navigate(Route::Hospitals {
                    username: Some(response.username),
                });
            }
            Err(e) => {
                debug!(error = %e, "Login form rejected");
                screen.set_rejected(e.into_errors());
            }
        }
    }

    fn handle_register_submit(&mut self) {
        let CurrentScreen::Register(screen) = &mut self.screen else {
            return;
        };

        let request = RegistrationRequest::new(screen.form());

        match self.register_use_case.execute(request) {
            Ok(response) => {
                info!(name = %response.name, "Registered, opening hospital list");
                self.navigate(Route::Hospitals { username: None });
            }
            Err(e) => {
                debug!(error = %e, "Registration form rejected");
                screen.set_rejected(e.into_errors());
            }
        }
    }

    fn handle_react(&mut self, index: usize) {
        match self.context.toggle_react(index) {
            Ok(()) => debug!(index, total = self.context.total_reacts(), "Reacted"),
            Err(e) => warn!(error = %e, "React ignored"),
        }
    }

    fn leave_splash(&mut self) {
        self.navigator.replace(Route::Login);
        self.show_current_route();
    }

    fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.show_current_route();
    }

    fn go_back(&mut self) -> EventResult {
        if self.navigator.back() {
            self.show_current_route();
            EventResult::Continue
        } else {
            info!(route = self.navigator.current().name(), "Back at root, exiting");
            EventResult::Exit
        }
    }

    /// Rebuilds the screen for the route on top of the stack.
    fn show_current_route(&mut self) {
        let route = self.navigator.current();
        info!(route = route.name(), depth = self.navigator.depth(), "Showing screen");

        self.screen = match route {
            Route::Splash => CurrentScreen::Splash(SplashScreen::new(
                self.splash_delay,
                self.animations,
                self.theme,
            )),
            Route::Login => CurrentScreen::Login(LoginScreen::new(self.theme)),
            Route::Register => CurrentScreen::Register(RegisterScreen::new(self.theme)),
            Route::Hospitals { username } => {
                CurrentScreen::Hospitals(HospitalScreenState::new(username.clone(), &self.theme))
            }
        };
    }
}
