/// Control that currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Login,
    SignUp,
}

impl Focus {
    pub const ORDER: [Focus; 4] = [Focus::Email, Focus::Password, Focus::Login, Focus::SignUp];

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn index(self) -> usize {
        match self {
            Focus::Email => 0,
            Focus::Password => 1,
            Focus::Login => 2,
            Focus::SignUp => 3,
        }
    }
}
