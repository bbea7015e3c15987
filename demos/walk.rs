use maze_pathfinding::{MazeConfig, Session, Step};

// Generates a maze, solves it and walks the agent to the goal, printing the maze before and after.
// S marks the start, G the goal, @ the agent, * the solution path and + other explored cells.
fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let mut session = match Session::new(MazeConfig::default().with_seed(seed)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{}", session.maze().grid());

    let result = session.solve().clone();
    let mut ticks = 0;
    while let Step::Moved(_) = session.tick() {
        ticks += 1;
    }

    let maze = session.maze();
    let agent = session.agent();
    for p in maze.grid().coordinates() {
        let c = if p == agent.position() {
            '@'
        } else if p == maze.start() {
            'S'
        } else if p == maze.goal() {
            'G'
        } else if result.path.contains(&p) {
            '*'
        } else if agent.explored().contains(&p) {
            '+'
        } else if maze.grid().is_open(p) {
            '.'
        } else {
            '#'
        };
        print!("{c}");
        if p.x as usize == maze.width() - 1 {
            println!();
        }
    }
    println!("Agent status: {}", agent.status());
    println!("Steps taken: {ticks}");
    println!("Path length: {}", result.path.len());
    println!("Explored nodes: {}", agent.explored().len());
}
