// Example: drive a player with a simulated clock, the way a UI timer would.
use algotrace::{TraceLimits, board_size, n_queens};
use algotrace_playback::{Direction, Player, PlayerOptions, StartPosition};

fn main() {
    let n = match board_size(6, &TraceLimits::default()) {
        Ok(n) => n,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let options = PlayerOptions::new()
        .with_start(StartPosition::BeforeFirst)
        .with_speed_slider(90);
    let mut player = Player::new(n_queens::trace(n), options);
    println!(
        "{} steps, {} ms per step",
        player.len(),
        player.animation_speed_ms()
    );

    player.play();
    let mut now_ms = 0u64;
    while player.is_playing() {
        if let Some(i) = player.tick(now_ms) {
            if let Some(step) = player.current_step() {
                println!("[{now_ms:>6} ms] #{i:<3} {:?}", step.state.board);
            }
        }
        now_ms += 16;
    }

    player.handle_step(Direction::Prev);
    println!("stepped back: {:?}", player.current_message());
}
