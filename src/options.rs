//! Game configuration options.

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_skunk_line(31)
///     .with_double_skunk_line(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Score that ends the game (121 for a standard game).
    pub winning_score: u16,
    /// A loser below this score is skunked.
    pub skunk_line: u16,
    /// A loser below this score is double skunked.
    pub double_skunk_line: u16,
    /// Points the dealer pegs when the starter is a Jack.
    pub his_heels_points: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            skunk_line: 91,
            double_skunk_line: 61,
            his_heels_points: 2,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u16) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the skunk line.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_skunk_line(31);
    /// assert_eq!(options.skunk_line, 31);
    /// ```
    #[must_use]
    pub const fn with_skunk_line(mut self, line: u16) -> Self {
        self.skunk_line = line;
        self
    }

    /// Sets the double skunk line.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_double_skunk_line(0);
    /// assert_eq!(options.double_skunk_line, 0);
    /// ```
    #[must_use]
    pub const fn with_double_skunk_line(mut self, line: u16) -> Self {
        self.double_skunk_line = line;
        self
    }

    /// Sets the points awarded for his heels.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels_points(0);
    /// assert_eq!(options.his_heels_points, 0);
    /// ```
    #[must_use]
    pub const fn with_his_heels_points(mut self, points: u8) -> Self {
        self.his_heels_points = points;
        self
    }
}
