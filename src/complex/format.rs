use crate::{Catalog, Complex};
use core::fmt;

/// Which forms of a [`Complex`] number to display
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Form {
    Algebraic,
    Polar,
    Both,
}

/// A [`Complex`] number displayed with the symbolic names from a [`Catalog`]
///
/// # Example
///
/// ```
/// use argand::{Catalog, Complex, Form};
/// let catalog = Catalog::standard();
/// let z = Complex::from_algebraic(1.0, 1.0);
/// let text = format!("{}", z.render(&catalog, Form::Polar));
/// assert_eq!(text, "\tPOLAR: z = 1*sqrt(2)(cos(45) + isin(45))");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Rendering<'a> {
    number: &'a Complex,
    catalog: &'a Catalog,
    form: Form,
}

impl Complex {
    /// Prepare this number for display in the chosen form
    pub fn render<'a>(&'a self, catalog: &'a Catalog, form: Form) -> Rendering<'a> {
        Rendering {
            number: self,
            catalog,
            form,
        }
    }
}

impl Rendering<'_> {
    // Non-finite values have no symbolic form, so show them as they are
    fn field(&self, x: f64) -> String {
        self.catalog.represent(x).unwrap_or_else(|_| x.to_string())
    }

    fn algebraic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = self.field(self.number.real());
        let imaginary = self.number.imaginary();
        let sign = if imaginary < 0.0 { '-' } else { '+' };
        let magnitude = imaginary.abs();
        if magnitude == 1.0 {
            write!(f, "\tALGEB: z = {real} {sign} i")
        } else {
            write!(f, "\tALGEB: z = {real} {sign} {}i", self.field(magnitude))
        }
    }

    fn polar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modulus = self.field(self.number.modulus());
        let argument = self.field(self.number.argument());
        write!(f, "\tPOLAR: z = {modulus}(cos({argument}) + isin({argument}))")
    }
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            Form::Algebraic => self.algebraic(f),
            Form::Polar => self.polar(f),
            Form::Both => {
                self.algebraic(f)?;
                f.write_str("\n")?;
                self.polar(f)
            }
        }
    }
}
