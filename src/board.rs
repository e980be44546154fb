use crate::error::SearchError;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Symbol of a cell that can never be entered.
pub const BLOCKED: char = '#';
/// Symbol marking the start of the search.
pub const START: char = 'A';
/// Symbol marking the goal of the search.
pub const GOAL: char = 'B';

/// [Board] is the rectangular character grid searched by the engine. It is validated on
/// construction: every row has the same width and there is exactly one [START] and one [GOAL]
/// cell. Connected components of the non-[BLOCKED] cells are kept in a [UnionFind] structure so
/// that reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<char>,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
}

impl Board {
    /// Builds a board from an already materialized grid of symbols, indexed `rows[y][x]`.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Board, SearchError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(SearchError::EmptyBoard)?;
        if width == 0 {
            return Err(SearchError::EmptyBoard);
        }
        let mut cells = Vec::with_capacity(width * height);
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SearchError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, symbol) in row.into_iter().enumerate() {
                let point = Point::new(x as i32, y as i32);
                let marker = match symbol {
                    START => Some(&mut start),
                    GOAL => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(SearchError::DuplicateMarker {
                            symbol,
                            first,
                            second: point,
                        });
                    }
                    *slot = Some(point);
                }
                cells.push(symbol);
            }
        }
        let start = start.ok_or(SearchError::MissingStart)?;
        let goal = goal.ok_or(SearchError::MissingGoal)?;
        let mut board = Board {
            width,
            height,
            cells,
            start,
            goal,
            components: UnionFind::new(width * height),
        };
        board.generate_components();
        debug!(
            "Loaded {}x{} board with start {} and goal {}",
            width, height, start, goal
        );
        Ok(board)
    }

    /// Parses map text with one row per line. Only line terminators are stripped, spaces are
    /// cells like any other symbol. Trailing empty lines are ignored.
    pub fn parse(text: &str) -> Result<Board, SearchError> {
        let mut rows = text
            .lines()
            .map(|line| {
                line.strip_suffix('\r')
                    .unwrap_or(line)
                    .chars()
                    .collect::<Vec<char>>()
            })
            .collect::<Vec<_>>();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Board::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// The symbol at `point`, or [None] if it lies outside the board.
    pub fn get(&self, point: Point) -> Option<char> {
        if self.in_bounds(point) {
            Some(self.cells[self.get_ix(point)])
        } else {
            None
        }
    }

    pub fn is_blocked(&self, point: Point) -> bool {
        self.get(point) == Some(BLOCKED)
    }

    /// Whether the cell at `point` is inside the board and not [BLOCKED].
    pub fn can_move_to(&self, point: Point) -> bool {
        matches!(self.get(point), Some(symbol) if symbol != BLOCKED)
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width)
    }

    /// The von Neumann neighbourhood of `point` in expansion order: +x, -x, +y, -y.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        SmallVec::from_buf([
            Point::new(point.x + 1, point.y),
            Point::new(point.x - 1, point.y),
            Point::new(point.x, point.y + 1),
            Point::new(point.x, point.y - 1),
        ])
    }

    /// The neighbours of `point` that are in bounds and not [BLOCKED], in expansion order.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        self.neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    fn get_ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix(*point))
    }

    /// Checks if `from` and `to` are on the same component.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        !self.unreachable(from, to)
    }

    /// Checks if `from` and `to` are not on the same component. Points outside the board or on
    /// blocked cells are unreachable.
    pub fn unreachable(&self, from: &Point, to: &Point) -> bool {
        if self.can_move_to(*from) && self.can_move_to(*to) {
            !self
                .components
                .equiv(self.get_ix(*from), self.get_ix(*to))
        } else {
            true
        }
    }

    /// Whether the goal can be reached from the start at all.
    pub fn solvable(&self) -> bool {
        let solvable = self.reachable(&self.start, &self.goal);
        if !solvable {
            info!("{} is not reachable from {}", self.goal, self.start);
        }
        solvable
    }

    /// Links up open grid neighbours into the same components. Only the +x and +y neighbours
    /// are needed since every edge is seen from both ends.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                for neighbour in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(neighbour) {
                        let ix = self.get_ix(neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl FromStr for Board {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locates_markers() {
        let board = Board::parse("A..\n.#.\n..B\n").unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.start(), Point::new(0, 0));
        assert_eq!(board.goal(), Point::new(2, 2));
        assert!(board.is_blocked(Point::new(1, 1)));
        assert_eq!(board.get(Point::new(3, 0)), None);
    }

    #[test]
    fn parse_strips_line_endings() {
        let board = Board::parse("AB\r\n..\n\n\n").unwrap();
        assert_eq!(board.height(), 2);
        assert_eq!(board.to_string(), "AB\n..\n");
    }

    /// Spaces are open ground, also in the last column.
    #[test]
    fn parse_keeps_trailing_spaces() {
        let text = "A  \n  B";
        let board = Board::parse(text).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.goal(), Point::new(2, 1));
        assert!(board.can_move_to(Point::new(2, 0)));
        assert!(board.solvable());
        let rows = text.lines().map(|line| line.chars().collect()).collect();
        assert_eq!(
            Board::from_rows(rows).unwrap().to_string(),
            board.to_string()
        );
        assert!(matches!(
            Board::parse("A \nB"),
            Err(SearchError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn rejects_malformed_boards() {
        assert!(matches!(Board::parse(""), Err(SearchError::EmptyBoard)));
        assert!(matches!(Board::parse("\n\n"), Err(SearchError::EmptyBoard)));
        assert!(matches!(
            Board::parse("A..\n.B"),
            Err(SearchError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(Board::parse("..B"), Err(SearchError::MissingStart)));
        assert!(matches!(Board::parse("A.."), Err(SearchError::MissingGoal)));
        assert!(matches!(
            Board::parse("ABA"),
            Err(SearchError::DuplicateMarker { symbol: 'A', .. })
        ));
    }

    #[test]
    fn neighbourhood_skips_walls_and_edges() {
        // |A# |
        // |  B|
        let board = Board::parse("A#.\n..B").unwrap();
        let neighbours = board.open_neighbours(&Point::new(0, 0));
        assert_eq!(neighbours.as_slice(), &[Point::new(0, 1)]);
        let neighbours = board.open_neighbours(&Point::new(1, 1));
        assert_eq!(
            neighbours.as_slice(),
            &[Point::new(2, 1), Point::new(0, 1)]
        );
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |A#.|
        // |.#B|
        let board = Board::parse("A#.\n.#B").unwrap();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(2, 0);
        assert!(board.reachable(&p1, &p2));
        assert!(board.unreachable(&p1, &p3));
        assert!(board.reachable(&p3, &board.goal()));
        assert!(board.unreachable(&p1, &Point::new(1, 0)));
        assert!(!board.solvable());
    }

    /// Asserts that the two corners are connected around an obstacle.
    #[test]
    fn reachable_around_wall() {
        // |A  |
        // | # |
        // |  B|
        let board = Board::parse("A..\n.#.\n..B").unwrap();
        assert!(board.solvable());
        assert_eq!(
            board.get_component(&board.start()),
            board.get_component(&board.goal())
        );
    }
}
