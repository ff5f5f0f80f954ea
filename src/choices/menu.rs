use crate::choice;
use crate::choices::Description;

choice!(MenuAction,
    CheckPair => "Check a pair - Enter two triples and test them as adjacent faces",
    ValidateTriple => "Validate a triple - Check a single triple and find its hypotenuse",
    Batch => "Batch - Check every pair listed in a text file",
    SelfTest => "Self-test - Run the built-in scenarios",
    Quit => "Quit"
);

choice!(OutputOrder,
    InOrder => "In Order - Report lines in file order",
    Shuffled => "Shuffled - Report lines in random order"
);
