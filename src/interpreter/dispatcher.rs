use crate::{
    ast::{Conditional, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Evaluator, evaluate},
        parser::statement::parse_statement,
        program::{Executor, MAX_NESTING_DEPTH},
        state::Folder,
    },
};

/// Line that ends the content of `folder create`.
pub const FOLDER_TERMINATOR: &str = ".";

impl Executor<'_> {
    /// Classifies one statement and runs the matching handler.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while classifying or executing the
    /// statement. Errors of statements inside a folder or branch body are
    /// reported by the nested run and do not surface here.
    pub fn dispatch(&mut self, statement: &str, depth: usize) -> Result<(), RuntimeError> {
        match parse_statement(statement)? {
            Statement::Assignment { name, value } => {
                let value = Evaluator::new(&self.state.variables).eval(&value)?;
                self.state.variables.set(name, value);
            },
            Statement::Print { expr } => {
                let value = Evaluator::new(&self.state.variables).eval(&expr)?;
                self.output.write_line(&value.to_string());
            },
            Statement::Input { name } => self.read_variable(name)?,
            Statement::FolderCreate { name } => self.create_folder(name),
            Statement::FolderList => self.list_folders(),
            Statement::FolderOpen { name } => self.open_folder(&name, depth)?,
            Statement::FolderDelete { name } => self.delete_folder(&name),
            Statement::Conditional(conditional) => self.run_conditional(&conditional, depth)?,
        }
        Ok(())
    }

    /// Reads one line and stores it as an evaluated value, or as the raw
    /// string when it does not evaluate.
    fn read_variable(&mut self, name: String) -> Result<(), RuntimeError> {
        let line = self.input
                       .read_line(&format!("Enter value for {name}: "))
                       .ok_or_else(|| RuntimeError::InputUnavailable { name: name.clone() })?;

        let value = evaluate(&line, &self.state.variables).unwrap_or_else(|_| line.into());
        self.state.variables.set(name, value);
        Ok(())
    }

    fn create_folder(&mut self, name: String) {
        let mut prompt = format!("Enter content for folder '{name}' (end with a single '.'):");
        let mut lines = Vec::new();

        while let Some(line) = self.input.read_line(&prompt) {
            if line.trim() == FOLDER_TERMINATOR {
                break;
            }
            lines.push(line);
            prompt.clear();
        }

        let folder = Folder::new(name, lines.join("\n"));
        self.output.write_line(&format!("Folder '{}' created successfully with content: {}",
                                        folder.name,
                                        folder.display_content()));
        self.state.folders.insert(folder);
    }

    fn list_folders(&mut self) {
        if self.state.folders.is_empty() {
            self.output.write_line("No folders created yet.");
            return;
        }
        for folder in self.state.folders.iter() {
            self.output
                .write_line(&format!("{}: {}", folder.name, folder.display_content()));
        }
    }

    fn open_folder(&mut self, name: &str, depth: usize) -> Result<(), RuntimeError> {
        let Some(folder) = self.state.folders.get(name) else {
            self.output.write_line(&format!("Folder '{name}' does not exist."));
            return Ok(());
        };

        let program = folder.program();
        let depth = enter(depth)?;
        self.run_nested(&program, depth);
        Ok(())
    }

    fn delete_folder(&mut self, name: &str) {
        if self.state.folders.remove(name).is_some() {
            self.output.write_line(&format!("Folder '{name}' deleted successfully."));
        } else {
            self.output.write_line(&format!("Folder '{name}' does not exist."));
        }
    }

    /// Runs the body when the condition is truthy. Otherwise runs the
    /// body-level `else:` branch, falling back to the inline `else` fragment
    /// of the condition.
    fn run_conditional(&mut self,
                       conditional: &Conditional,
                       depth: usize)
                       -> Result<(), RuntimeError> {
        let truthy = Evaluator::new(&self.state.variables).eval(&conditional.condition)?
                                                           .is_truthy();

        let branch = if truthy {
            Some(&conditional.body)
        } else {
            conditional.else_body.as_ref().or(conditional.inline_else.as_ref())
        };

        if let Some(program) = branch {
            let depth = enter(depth)?;
            self.run_nested(program, depth);
        }
        Ok(())
    }
}

/// Returns the depth for a nested run, or an error past the limit.
const fn enter(depth: usize) -> Result<usize, RuntimeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(RuntimeError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }
    Ok(depth + 1)
}
