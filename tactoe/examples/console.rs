use std::io;

use itertools::Itertools;
use tactoe::GameHistory;

fn print_state(game: &GameHistory) {
    println!("{}", game.current_snapshot());
    println!("{}", game.status());
}

// Type a cell index (0-8) to play, `j <n>` to jump, `moves` to list the
// history, or `quit`.
fn main() {
    let mut game = GameHistory::new();
    let mut input = String::new();
    print_state(&game);
    loop {
        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim();
        if let Ok(index) = line.parse::<usize>() {
            if let Err(e) = game.play_index(index) {
                println!("ignored: {e}");
            }
            print_state(&game);
        } else if let Some(target) = line.strip_prefix("j ") {
            match target.trim().parse::<usize>() {
                Ok(index) => match game.jump_to(index) {
                    Ok(()) => print_state(&game),
                    Err(e) => println!("{e}"),
                },
                Err(_) => println!("expected a move number"),
            }
        } else if line == "moves" {
            let list = game
                .move_list()
                .iter()
                .map(|entry| {
                    let marker = if entry.index == game.current_move() { '>' } else { ' ' };
                    format!("{marker}{} {entry}", entry.index)
                })
                .join("\n");
            println!("{list}");
        } else if line == "quit" {
            break;
        }
    }
}
