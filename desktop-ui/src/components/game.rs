use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Delay before the CPU's hand is revealed, for suspense.
const REVEAL_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "ROCK",
            Choice::Paper => "PAPER",
            Choice::Scissors => "SCISSORS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    Player,
    Cpu,
}

pub fn round_outcome(player: Choice, cpu: Choice) -> Outcome {
    if player == cpu {
        Outcome::Draw
    } else if player.beats(cpu) {
        Outcome::Player
    } else {
        Outcome::Cpu
    }
}

pub fn outcome_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "It's a Draw!",
        Outcome::Player => "You Win!",
        Outcome::Cpu => "Computer Wins!",
    }
}

fn random_choice() -> Choice {
    let index = (js_sys::Math::random() * Choice::ALL.len() as f64) as usize;
    Choice::ALL[index.min(Choice::ALL.len() - 1)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Selecting,
    Playing,
    Result,
}

#[component]
pub fn GameView() -> Element {
    let mut phase = use_signal(|| Phase::Selecting);
    let mut player = use_signal(|| None::<Choice>);
    let mut cpu = use_signal(|| None::<Choice>);
    let mut score = use_signal(|| (0u32, 0u32));
    let mut banner = use_signal(|| "");

    let pick = use_callback(move |choice: Choice| {
        player.set(Some(choice));
        cpu.set(None);
        phase.set(Phase::Playing);

        spawn(async move {
            TimeoutFuture::new(REVEAL_DELAY_MS).await;
            let cpu_choice = random_choice();
            cpu.set(Some(cpu_choice));

            let outcome = round_outcome(choice, cpu_choice);
            match outcome {
                Outcome::Draw => {}
                Outcome::Player => score.write().0 += 1,
                Outcome::Cpu => score.write().1 += 1,
            }
            banner.set(outcome_banner(outcome));
            phase.set(Phase::Result);
        });
    });

    let mut reset = move || {
        phase.set(Phase::Selecting);
        player.set(None);
        cpu.set(None);
        banner.set("");
    };

    let (player_score, cpu_score) = *score.read();
    let current_phase = *phase.read();

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; background: #2e2e2e; \
                    color: white; padding: 1rem; overflow: hidden; user-select: none; \
                    position: relative;",

            // Score board
            div {
                style: "display: flex; justify-content: space-between; align-items: center; \
                        margin-bottom: 2rem; padding: 1rem 2rem; background: rgba(0,0,0,0.2); \
                        border-radius: 12px; border: 1px solid rgba(255,255,255,0.1);",
                div {
                    style: "text-align: center;",
                    div { style: "font-size: 0.8rem; color: #9ca3af;", "PLAYER" }
                    div { style: "font-size: 2.25rem; font-weight: 700; color: #4ade80;", "{player_score}" }
                }
                div { style: "font-size: 1.5rem; font-weight: 700; color: #facc15;", "VS" }
                div {
                    style: "text-align: center;",
                    div { style: "font-size: 0.8rem; color: #9ca3af;", "CPU" }
                    div { style: "font-size: 2.25rem; font-weight: 700; color: #f87171;", "{cpu_score}" }
                }
            }

            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center;",

                if current_phase == Phase::Selecting {
                    div {
                        style: "display: flex; gap: 2rem; align-items: center; justify-content: center;",
                        for choice in Choice::ALL {
                            ChoiceCard { choice, on_pick: pick }
                        }
                    }
                } else {
                    div {
                        style: "display: flex; align-items: center; justify-content: center; gap: 4rem; \
                                width: 100%;",

                        HandCard {
                            owner: "YOU",
                            owner_color: "#4ade80",
                            choice: *player.read(),
                        }

                        div {
                            style: "display: flex; flex-direction: column; align-items: center; \
                                    justify-content: center; width: 9rem; gap: 1rem;",
                            if current_phase == Phase::Result {
                                div {
                                    style: "font-size: 1.75rem; font-weight: 700; text-align: center; \
                                            white-space: nowrap; text-shadow: 0 2px 8px rgba(0,0,0,0.6);",
                                    "{banner}"
                                }
                                button {
                                    style: "padding: 0.5rem 1.5rem; background: #eab308; color: black; \
                                            font-weight: 700; border: none; border-radius: 6px; cursor: pointer; \
                                            text-transform: uppercase; letter-spacing: 0.1em;",
                                    onclick: move |_| reset(),
                                    "Play Again"
                                }
                            } else {
                                div {
                                    style: "font-size: 2.25rem; font-weight: 700; \
                                            color: rgba(255,255,255,0.2); animation: pulse 1s infinite;",
                                    "VS"
                                }
                            }
                        }

                        HandCard {
                            owner: "CPU",
                            owner_color: "#f87171",
                            choice: *cpu.read(),
                        }
                    }
                }
            }

            div {
                style: "position: absolute; bottom: 0.5rem; right: 0.5rem; font-size: 0.7rem; \
                        color: rgba(255,255,255,0.1); pointer-events: none;",
                "RPS v1.0"
            }
        }
    }
}

#[component]
fn ChoiceCard(choice: Choice, on_pick: Callback<Choice>) -> Element {
    let glyph = choice.glyph();
    let label = choice.label();

    rsx! {
        button {
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.75rem; \
                    background: transparent; border: none; cursor: pointer;",
            onclick: move |_| on_pick.call(choice),

            div {
                style: "width: 8rem; height: 11rem; display: flex; align-items: center; \
                        justify-content: center; background: #d6cfb4; border-radius: 8px; \
                        border: 4px solid #4a4a4a; box-shadow: 0 10px 25px rgba(0,0,0,0.4); \
                        font-size: 4rem;",
                "{glyph}"
            }
            span {
                style: "font-size: 1.1rem; letter-spacing: 0.2em; color: #fef08a;",
                "{label}"
            }
        }
    }
}

#[component]
fn HandCard(owner: &'static str, owner_color: &'static str, choice: Option<Choice>) -> Element {
    let glyph = choice.map(Choice::glyph);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center;",
            div {
                style: "font-size: 0.8rem; margin-bottom: 1rem; color: {owner_color}; \
                        font-weight: 700; letter-spacing: 0.2em;",
                "{owner}"
            }
            div {
                style: "width: 10rem; height: 14rem; display: flex; align-items: center; \
                        justify-content: center; background: #d6cfb4; border-radius: 8px; \
                        border: 4px solid #4a4a4a; box-shadow: 0 20px 40px rgba(0,0,0,0.5); \
                        font-size: 5rem;",
                if let Some(glyph) = glyph {
                    "{glyph}"
                } else {
                    span {
                        style: "font-size: 2.5rem; color: #2a2a2a; animation: pulse 1s infinite;",
                        "?"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_matrix_is_the_usual_cycle() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(Choice::Scissors.beats(Choice::Paper));
        for choice in Choice::ALL {
            assert!(!choice.beats(choice));
        }
    }

    #[test]
    fn outcome_follows_beats() {
        assert_eq!(round_outcome(Choice::Rock, Choice::Rock), Outcome::Draw);
        assert_eq!(round_outcome(Choice::Rock, Choice::Scissors), Outcome::Player);
        assert_eq!(round_outcome(Choice::Rock, Choice::Paper), Outcome::Cpu);
    }

    #[test]
    fn banners_cover_every_outcome() {
        assert_eq!(outcome_banner(Outcome::Draw), "It's a Draw!");
        assert_eq!(outcome_banner(Outcome::Player), "You Win!");
        assert_eq!(outcome_banner(Outcome::Cpu), "Computer Wins!");
    }
}
