//! Math mode content: inline/display formulas, named vectors and matrices.

use std::fmt;

use crate::command::Command;
use crate::container::Container;
use crate::error::{MarkupError, Result};
use crate::node::{Child, Markup};
use crate::package::{Package, Packages};

/// A formula delimited with `$...$` (inline) or `$$...$$` (display).
///
/// Children are joined with single spaces. Whether the formula is inline is
/// fixed when it is constructed.
#[derive(Debug)]
pub struct Math {
    inline: bool,
    content: Container,
}

impl Math {
    pub fn new(inline: bool) -> Self {
        Self {
            inline,
            content: Container::new(),
        }
    }

    pub fn inline() -> Self {
        Self::new(true)
    }

    pub fn block() -> Self {
        Self::new(false)
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn append(&mut self, child: impl Into<Child>) -> &mut Self {
        self.content.append(child);
        self
    }

    /// Builder-style [`append`](Self::append).
    pub fn with(mut self, child: impl Into<Child>) -> Self {
        self.content.append(child);
        self
    }

    pub fn content(&self) -> &Container {
        &self.content
    }
}

impl Markup for Math {
    fn dumps(&self) -> String {
        let body = self.content.dumps_with(" ");
        if self.inline {
            format!("${body}$")
        } else {
            format!("$${body}$$\n")
        }
    }

    fn packages(&self) -> Packages {
        self.content.packages()
    }
}

/// A vector name in bold, `\mathbf{name}`.
#[derive(Debug)]
pub struct VectorName {
    command: Command,
}

impl VectorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            command: Command::builtin("mathbf").arg(name.into()),
        }
    }
}

impl Markup for VectorName {
    fn dumps(&self) -> String {
        self.command.dumps()
    }
}

/// Bracket style of a matrix, selecting the amsmath environment name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixType {
    /// `pmatrix`
    #[default]
    Paren,
    /// `bmatrix`
    Bracket,
    /// `Bmatrix`
    Brace,
    /// `vmatrix`
    Vert,
    /// `Vmatrix`
    DoubleVert,
    /// `matrix`, no delimiters.
    Plain,
}

impl MatrixType {
    /// The prefix placed in front of `matrix` in the environment name.
    pub fn tag(self) -> &'static str {
        match self {
            MatrixType::Paren => "p",
            MatrixType::Bracket => "b",
            MatrixType::Brace => "B",
            MatrixType::Vert => "v",
            MatrixType::DoubleVert => "V",
            MatrixType::Plain => "",
        }
    }
}

/// A two-dimensional array typeset as an amsmath matrix environment.
///
/// The rows are taken by value and never modified; each element is rendered
/// with its [`Display`](fmt::Display) implementation. Elements must also be
/// `Debug`, like every [`Markup`] node.
///
/// ```
/// use texweave_markup::{Markup, Matrix, MatrixType};
///
/// let m = Matrix::new(vec![vec![1, 0], vec![0, 1]])?.with_type(MatrixType::Bracket);
/// assert_eq!(m.dumps(), "\\begin{bmatrix}\n1&0\\\\\n0&1\n\\end{bmatrix}");
/// # Ok::<(), texweave_markup::MarkupError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
    mtype: MatrixType,
    alignment: Option<String>,
}

impl<T: fmt::Display + fmt::Debug> Matrix<T> {
    /// Wraps a row-major array.
    ///
    /// Fails with [`MarkupError::InvalidMatrixShape`] for an array without rows,
    /// without columns, or with rows of differing lengths.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = match rows.first() {
            None => {
                return Err(MarkupError::InvalidMatrixShape(
                    "matrix has no rows".to_string(),
                ))
            }
            Some(first) => first.len(),
        };
        if cols == 0 {
            return Err(MarkupError::InvalidMatrixShape(
                "matrix has no columns".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != cols {
                return Err(MarkupError::InvalidMatrixShape(format!(
                    "jagged matrix: row 1 has {} columns, but row {} has {}",
                    cols,
                    i + 1,
                    row.len()
                )));
            }
        }

        Ok(Self {
            rows,
            mtype: MatrixType::default(),
            alignment: None,
        })
    }

    pub fn with_type(mut self, mtype: MatrixType) -> Self {
        self.mtype = mtype;
        self
    }

    /// Sets the column alignment (e.g. `r`), switching to the starred environment.
    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = Some(alignment.into());
        self
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows[0].len())
    }

    pub fn matrix_type(&self) -> MatrixType {
        self.mtype
    }

    pub fn alignment(&self) -> Option<&str> {
        self.alignment.as_deref()
    }

    fn environment(&self) -> String {
        let mut env = format!("{}matrix", self.mtype.tag());
        if self.alignment.is_some() {
            env.push('*');
        }
        env
    }
}

impl<T: fmt::Display + fmt::Debug> Markup for Matrix<T> {
    fn dumps(&self) -> String {
        let env = self.environment();
        let mut out = format!("\\begin{{{env}}}");
        if let Some(alignment) = &self.alignment {
            out.push('{');
            out.push_str(alignment);
            out.push('}');
        }
        out.push('\n');

        let last_row = self.rows.len() - 1;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    out.push('&');
                }
                out.push_str(&value.to_string());
            }
            if y != last_row {
                out.push_str("\\\\\n");
            }
        }

        out.push_str(&format!("\n\\end{{{env}}}"));
        out
    }

    fn packages(&self) -> Packages {
        [Package::new("amsmath")].into_iter().collect()
    }
}
