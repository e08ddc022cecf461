use koloreto_core as game;
use yew::prelude::*;

use crate::settings::SettingsView;
use crate::utils::js_random_seed;

const SWATCHES_PER_ROW: usize = 3;

/// DOM-free view model over the engine. Owns the tap guards, so input that a
/// decided round must ignore never reaches the engine in the first place.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    engine: game::GameEngine,
    config: game::GameConfig,
}

impl GameSession {
    fn new(config: game::GameConfig, seed: u64) -> Self {
        use game::RoundGenerator;

        let round = game::RandomRoundGenerator::new(seed).generate(config);
        Self {
            engine: game::GameEngine::new(config, round),
            config,
        }
    }

    fn state(&self) -> game::GameState {
        self.engine.state()
    }

    fn lives(&self) -> game::Lives {
        self.engine.lives()
    }

    fn points(&self) -> game::Points {
        self.engine.points()
    }

    fn answers(&self) -> &[game::Color] {
        self.engine.round().answers()
    }

    fn color_code(&self) -> String {
        self.engine.round().color_code()
    }

    /// Swatch taps only count while the game is live and the round is open.
    fn can_tap_swatches(&self) -> bool {
        matches!(self.state(), game::GameState::Playing)
    }

    fn tap_swatch(&mut self, index: usize) -> bool {
        if !self.can_tap_swatches() {
            log::trace!("swatch {} tapped after the round was decided, ignored", index);
            return false;
        }

        let Some(candidate) = self.answers().get(index).copied() else {
            log::warn!("swatch index {} out of range", index);
            return false;
        };

        let outcome = self.engine.submit_answer(candidate);
        log::debug!("swatch {} ({}): {:?}", index, candidate, outcome);
        outcome.has_update()
    }

    fn advance_round(&mut self, seed: u64) -> bool {
        use game::RoundGenerator;

        if !self.state().is_round_won() {
            log::trace!("next round requested while the round is still open, ignored");
            return false;
        }

        let round = game::RandomRoundGenerator::new(seed).generate(self.config);
        self.engine.start_next_round(round);
        true
    }

    fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config, seed);
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    TapSwatch(usize),
    NextRound,
    NewGame,
    ToggleSettings,
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    /// Force the first round's seed instead of random
    #[prop_or_default]
    pub(crate) seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct SwatchProps {
    index: usize,
    color: game::Color,
    #[prop_or_default]
    locked: bool,
    callback: Callback<usize>,
}

#[function_component(SwatchView)]
fn swatch_component(props: &SwatchProps) -> Html {
    let SwatchProps {
        index,
        color,
        locked,
        callback,
    } = props.clone();

    let class = classes!("swatch", locked.then_some("locked"));
    let style = format!("background-color: {}", color);
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        log::trace!("swatch {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {style} {onclick}/>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    settings_open: bool,
}

impl GameView {
    fn state_class(&self) -> Classes {
        use game::GameState::*;

        classes!(match self.session.state() {
            Playing => "in-progress",
            RoundWon => "round-won",
            GameOver => "game-over",
        })
    }

    fn view_game_screen(&self, ctx: &Context<Self>) -> Html {
        let locked = !self.session.can_tap_swatches();
        let callback = ctx.link().callback(Msg::TapSwatch);

        let swatch_rows =
            self.session
                .answers()
                .chunks(SWATCHES_PER_ROW)
                .enumerate()
                .map(|(row, colors)| {
                    html! {
                        <tr>
                            {
                                for colors.iter().enumerate().map(|(col, &color)| {
                                    let index = row * SWATCHES_PER_ROW + col;
                                    html! {
                                        <SwatchView {index} {color} {locked} callback={callback.clone()}/>
                                    }
                                })
                            }
                        </tr>
                    }
                });

        let cb_next_round = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NextRound
        });

        html! {
            <>
                <nav>
                    <aside>{format!("Life: {}", self.session.lives())}</aside>
                    <aside>{format!("Points: {}", self.session.points())}</aside>
                </nav>
                <h1>{"Guess the color"}</h1>
                <code class="color-code">{self.session.color_code()}</code>
                <table class="swatches">
                    { for swatch_rows }
                </table>
                if self.session.state().is_round_won() {
                    <button class="next-round" onclick={cb_next_round}>{"Next Round!"}</button>
                }
            </>
        }
    }

    fn view_final_score(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <section class="final-score">
                <h1>{"Game Over"}</h1>
                <p>{format!("Your final score is {}", self.session.points())}</p>
                <button onclick={cb_new_game}>{"Start New Game"}</button>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: GameSession::new(game::GameConfig::default(), seed),
            settings_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            TapSwatch(index) => self.session.tap_swatch(index),
            NextRound => self.session.advance_round(js_random_seed()),
            NewGame => {
                self.session.restart(js_random_seed());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = if self.session.state().is_over() {
            self.view_final_score(ctx)
        } else {
            self.view_game_screen(ctx)
        };

        let cb_show_settings = ctx.link().callback(|_| Msg::ToggleSettings);

        html! {
            <div class={classes!("koloreto", self.state_class())}>
                <small onclick={cb_show_settings}>{"···"}</small>
                { content }
                <SettingsView open={self.settings_open}/>
            </div>
        }
    }
}
