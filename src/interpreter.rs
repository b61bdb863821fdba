use crate::{Catalog, Complex, Form, Problem};
use log::debug;
use std::io::{self, BufRead, Write};

/// Usage text shown by `help`
pub const HELP: &str = "Complex number calculator.
Usage:
\thelp -> display this
\texit -> exit

\t[a]lgebraic(real, imag) -> add a new complex number from algebraic form
\t[p]olar(mod, arg)       -> add a new complex number from polar form, arg in degrees

\tshow([a/p]) -> display all added numbers in desired form (displays both by default)
\tclear       -> clear all added numbers

\tadd(z1, z2) -> z1 + z2
\tsub(z1, z2) -> z1 - z2
\tmul(z1, z2) -> z1 * z2
\tdiv(z1, z2) -> z1 / z2
\tpow(z1, x)  -> z1^x

\tz1 and z2 are the indices of added numbers, e.g. add(0, 1) for Z0 + Z1";

/// What the interpreter has to say about one line of input
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// Nothing was entered
    Nothing,
    /// Text to show, possibly empty
    Output(String),
    /// The session is over
    Exit,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Calculation {
    Algebraic(f64, f64),
    Polar(f64, f64),
    Binary(Operator, usize, usize),
    Pow(usize, f64),
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Exit,
    Help,
    Show(Form),
    Clear,
    Store(Calculation),
}

// Lowercased, split on parentheses and commas, with empty pieces dropped
fn tokens(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split(['(', ',', ')'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

fn decimal(s: &str) -> Result<f64, Problem> {
    s.parse().map_err(|_| Problem::BadDecimal)
}

fn index(s: &str) -> Result<usize, Problem> {
    s.parse().map_err(|_| Problem::BadInteger)
}

fn pair(args: &[String]) -> Result<(&str, &str), Problem> {
    match args {
        [first, second, ..] => Ok((first.as_str(), second.as_str())),
        _ => Err(Problem::InsufficientParameters),
    }
}

impl Command {
    fn binary(op: Operator, args: &[String]) -> Result<Self, Problem> {
        let (a, b) = pair(args)?;
        Ok(Command::Store(Calculation::Binary(op, index(a)?, index(b)?)))
    }

    fn parse(tokens: &[String]) -> Result<Self, Problem> {
        let (name, args) = tokens.split_first().ok_or(Problem::ParseError)?;

        use Calculation::*;
        use Operator::*;
        match name.as_str() {
            "exit" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "show" => match args.first() {
                None => Ok(Command::Show(Form::Both)),
                Some(form) if form.starts_with('a') => Ok(Command::Show(Form::Algebraic)),
                Some(_) => Ok(Command::Show(Form::Polar)),
            },
            "a" | "algebraic" => {
                let (real, imaginary) = pair(args)?;
                Ok(Command::Store(Algebraic(decimal(real)?, decimal(imaginary)?)))
            }
            "p" | "polar" => {
                let (modulus, argument) = pair(args)?;
                Ok(Command::Store(Polar(decimal(modulus)?, decimal(argument)?)))
            }
            "add" => Command::binary(Add, args),
            "sub" => Command::binary(Sub, args),
            "mul" => Command::binary(Mul, args),
            "div" => Command::binary(Div, args),
            "pow" => {
                let (z, exponent) = pair(args)?;
                Ok(Command::Store(Pow(index(z)?, decimal(exponent)?)))
            }
            _ => Err(Problem::ParseError),
        }
    }
}

/// Line-oriented complex number calculator
///
/// Results are stored as `Z0`, `Z1` and so on, up to a fixed capacity,
/// and are displayed using the symbolic names from a [`Catalog`].
///
/// # Example
///
/// ```
/// use argand::{Catalog, Interpreter, Reply};
/// let catalog = Catalog::standard();
/// let mut calculator = Interpreter::new(&catalog, 10);
/// let reply = calculator.execute("a(1.5, -2)").unwrap();
/// let expected = "Z0:\tALGEB: z = 3*1/2 - 2i\n\tPOLAR: z = 5*1/2(cos(-53) + isin(-53))";
/// assert_eq!(reply, Reply::Output(expected.to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct Interpreter<'a> {
    catalog: &'a Catalog,
    results: Vec<Complex>,
    capacity: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(catalog: &'a Catalog, capacity: usize) -> Self {
        Self {
            catalog,
            results: Vec::new(),
            capacity,
        }
    }

    /// The numbers stored so far, Z0 first
    pub fn results(&self) -> &[Complex] {
        &self.results
    }

    fn get(&self, index: usize) -> Result<Complex, Problem> {
        self.results.get(index).copied().ok_or(Problem::NotFound)
    }

    fn calculate(&self, calculation: Calculation) -> Result<Complex, Problem> {
        use Calculation::*;
        match calculation {
            Algebraic(real, imaginary) => Ok(Complex::from_algebraic(real, imaginary)),
            Polar(modulus, argument) => Ok(Complex::from_polar(modulus, argument)),
            Binary(op, a, b) => {
                let (a, b) = (self.get(a)?, self.get(b)?);
                match op {
                    Operator::Add => Ok(a + b),
                    Operator::Sub => Ok(a - b),
                    Operator::Mul => Ok(a * b),
                    Operator::Div => a / b,
                }
            }
            Pow(z, exponent) => Ok(self.get(z)?.pow(exponent)),
        }
    }

    fn store(&mut self, calculation: Calculation) -> Result<String, Problem> {
        if self.results.len() >= self.capacity {
            return Err(Problem::Exhausted);
        }
        let number = self.calculate(calculation)?;
        let fields = [
            number.real(),
            number.imaginary(),
            number.modulus(),
            number.argument(),
        ];
        if fields.iter().any(|x| x.is_nan()) {
            return Err(Problem::NotANumber);
        }
        if !number.is_finite() {
            return Err(Problem::Infinity);
        }

        let n = self.results.len();
        debug!("Z{n} = {calculation:?}");
        self.results.push(number);
        Ok(format!("Z{n}:{}", number.render(self.catalog, Form::Both)))
    }

    fn show(&self, form: Form) -> String {
        let lines: Vec<String> = self
            .results
            .iter()
            .enumerate()
            .map(|(n, number)| format!("Z{n}:{}", number.render(self.catalog, form)))
            .collect();
        lines.join("\n")
    }

    /// Interpret a single line of input
    pub fn execute(&mut self, line: &str) -> Result<Reply, Problem> {
        let tokens = tokens(line);
        if tokens.is_empty() {
            return Ok(Reply::Nothing);
        }

        match Command::parse(&tokens)? {
            Command::Exit => Ok(Reply::Exit),
            Command::Help => Ok(Reply::Output(HELP.to_string())),
            Command::Show(form) => Ok(Reply::Output(self.show(form))),
            Command::Clear => {
                self.results.clear();
                Ok(Reply::Output(String::new()))
            }
            Command::Store(calculation) => Ok(Reply::Output(self.store(calculation)?)),
        }
    }

    /// Explain a problem from [`execute`](Self::execute) for this line
    pub fn describe(&self, problem: Problem, line: &str) -> String {
        use Problem::*;
        match problem {
            ParseError => {
                let command = tokens(line).into_iter().next().unwrap_or_default();
                format!("Unknown command: '{command}'. See 'help'.")
            }
            InsufficientParameters => String::from("Not enough arguments! See 'help'."),
            Exhausted => String::from("Out of space. Use 'clear'."),
            NotFound => match self.results.len() {
                0 => String::from("Invalid number indexing. Nothing stored yet."),
                n => format!("Invalid number indexing. Max index: {}", n - 1),
            },
            DivideByZero => String::from("Division by 0. Nothing stored."),
            BadInteger => String::from("Indices must be whole numbers like 0 or 1. See 'help'."),
            BadDecimal => String::from("Unable to parse number. See 'help'."),
            NotANumber => String::from("The result is not a number. Nothing stored."),
            Infinity => String::from("The result is infinite. Nothing stored."),
            BadDivisor => format!("Calculation failed: {problem}"),
        }
    }

    /// Interpret every line of `input` until `exit` or the end of input
    ///
    /// Each reply or problem is written to `output` followed by a blank line.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Reply::Exit) => break,
                Ok(Reply::Nothing) => continue,
                Ok(Reply::Output(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(problem) => {
                    debug!("{line:?} failed: {problem}");
                    writeln!(output, "{}", self.describe(problem, &line))?;
                }
            }
            writeln!(output)?;
        }
        output.flush()
    }
}
