//! Execution of decoded module bodies.

use std::path::Path;

use mfs_marshal::{CodeObject, Instruction};
use tracing::trace;

use crate::{HostError, Interpreter, ModuleRef, Value};

/// Run `code` as the body of `module`, one instruction at a time.
pub(crate) fn run(
    interp: &Interpreter,
    module: &ModuleRef,
    code: CodeObject,
    filename: &Path,
) -> Result<(), HostError> {
    for instr in code.instructions {
        trace!(module = %module.name(), %instr, "exec");
        match instr {
            Instruction::Store { name, value } => module.set(&name, Value::from(value)),
            Instruction::Import { module: target, bind } => {
                let imported = interp.import(&target)?;
                match bind {
                    Some(bind) => module.set(&bind, Value::Module(imported)),
                    None => {
                        // `import a.b` binds `a`
                        let top = target.split('.').next().unwrap_or(&target);
                        let bound = if top == target {
                            imported
                        } else {
                            interp.import(top)?
                        };
                        module.set(top, Value::Module(bound));
                    }
                }
            }
            Instruction::Alias { target, source } => {
                let value = module
                    .get(&source)
                    .ok_or_else(|| HostError::AttributeNotFound {
                        module: module.name(),
                        attr: source.clone(),
                    })?;
                module.set(&target, value);
            }
            Instruction::Print { text } => interp.output().println(&text),
            Instruction::Raise { message } => {
                return Err(HostError::Raised {
                    module: module.name(),
                    message,
                    filename: filename.to_path_buf(),
                })
            }
        }
    }
    Ok(())
}
