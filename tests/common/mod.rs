//! Shared test host: a tiny scripted stand-in for the hosting
//! application's interpreter.

use script_panel::{EvalError, OutputSink, ScriptHost};

/// A host with one known object (`os`) and a single runnable expression.
/// Records what the panel asks it to do.
#[derive(Default)]
pub struct FakeHost {
    pub eval_calls: Vec<String>,
    pub exec_calls: Vec<String>,
    pub introspect_calls: Vec<String>,
}

impl ScriptHost for FakeHost {
    fn eval_expression(
        &mut self,
        expr: &str,
        out: &mut dyn OutputSink,
    ) -> Result<Option<String>, EvalError> {
        self.eval_calls.push(expr.to_string());
        match expr {
            "1 + 1" => Ok(Some("2".to_string())),
            "None" => Ok(None),
            "print('hi')" => {
                out.write("hi");
                Ok(None)
            }
            "1 / 0" => Err(EvalError::Raised {
                trace: "Traceback (most recent call last):\nZeroDivisionError: division by zero"
                    .to_string(),
            }),
            _ => Err(EvalError::NotAnExpression),
        }
    }

    fn exec_block(&mut self, code: &str, out: &mut dyn OutputSink) -> Result<(), EvalError> {
        self.exec_calls.push(code.to_string());
        if code.contains("boom") {
            Err(EvalError::Raised {
                trace: "Traceback (most recent call last):\nNameError: name 'boom' is not defined"
                    .to_string(),
            })
        } else {
            out.write("done");
            Ok(())
        }
    }

    fn attribute_names(&mut self, expr: &str) -> Result<Vec<String>, EvalError> {
        self.introspect_calls.push(expr.to_string());
        match expr {
            "os" => Ok(vec![
                "path".to_string(),
                "getcwd".to_string(),
                "_internal".to_string(),
            ]),
            _ => Err(EvalError::Raised {
                trace: format!("NameError: name '{expr}' is not defined"),
            }),
        }
    }
}
